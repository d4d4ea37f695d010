//! Interactive builder for `.tfgraph.toml` snippets on the docs page.

use std::fmt;

use leptos::prelude::*;

use super::code_block::CodeBlock;

/// File name offered for download.
pub const CONFIG_FILE_NAME: &str = ".tfgraph.toml";

/// Report format written by the CLI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
	/// Interactive HTML report.
	#[default]
	Html,
	/// Graph as JSON.
	Json,
	/// Graphviz DOT.
	Dot,
	/// Mermaid flowchart.
	Mermaid,
}

impl OutputFormat {
	/// Every format, in menu order.
	pub const ALL: [OutputFormat; 4] = [Self::Html, Self::Json, Self::Dot, Self::Mermaid];

	/// Value written to the config file.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Html => "html",
			Self::Json => "json",
			Self::Dot => "dot",
			Self::Mermaid => "mermaid",
		}
	}

	/// Parses a value written by [`OutputFormat::as_str`].
	pub fn parse(value: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|f| f.as_str() == value)
	}
}

/// Color theme of the HTML report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
	/// Dark background.
	#[default]
	Dark,
	/// Light background.
	Light,
}

impl Theme {
	/// Value written to the config file.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Dark => "dark",
			Self::Light => "light",
		}
	}
}

/// Options picked in the generator form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigOptions {
	/// Report format.
	pub format: OutputFormat,
	/// Report theme; only written for HTML.
	pub theme: Theme,
	/// Whether the report starts with the layout running.
	pub physics: bool,
	/// Label truncation length.
	pub max_label_length: u32,
}

impl ConfigOptions {
	/// Allowed label lengths in the form.
	pub const LABEL_RANGE: std::ops::RangeInclusive<u32> = 8..=64;

	/// Returns the options with `max_label_length` clamped into [`Self::LABEL_RANGE`].
	pub fn normalized(self) -> Self {
		Self {
			max_label_length: self
				.max_label_length
				.clamp(*Self::LABEL_RANGE.start(), *Self::LABEL_RANGE.end()),
			..self
		}
	}
}

impl Default for ConfigOptions {
	fn default() -> Self {
		Self {
			format: OutputFormat::default(),
			theme: Theme::default(),
			physics: true,
			max_label_length: 25,
		}
	}
}

impl fmt::Display for ConfigOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let opts = self.normalized();
		writeln!(f, "# {CONFIG_FILE_NAME}")?;
		writeln!(f, "[output]")?;
		writeln!(f, "format = \"{}\"", opts.format.as_str())?;
		if opts.format == OutputFormat::Html {
			writeln!(f, "theme = \"{}\"", opts.theme.as_str())?;
		}
		writeln!(f)?;
		writeln!(f, "[graph]")?;
		writeln!(f, "physics = {}", opts.physics)?;
		write!(f, "max_label_length = {}", opts.max_label_length)
	}
}

/// Form plus live preview of the generated config.
#[component]
pub fn ConfigGenerator() -> impl IntoView {
	let (options, set_options) = signal(ConfigOptions::default());
	let snippet = Signal::derive(move || options.get().to_string());

	let on_format = move |ev: web_sys::Event| {
		if let Some(format) = OutputFormat::parse(&event_target_value(&ev)) {
			set_options.update(|o| o.format = format);
		}
	};
	let on_theme = move |ev: web_sys::Event| {
		let theme = if event_target_value(&ev) == Theme::Light.as_str() {
			Theme::Light
		} else {
			Theme::Dark
		};
		set_options.update(|o| o.theme = theme);
	};
	let on_physics = move |ev: web_sys::Event| {
		let checked = event_target_checked(&ev);
		set_options.update(|o| o.physics = checked);
	};
	let on_label = move |ev: web_sys::Event| match event_target_value(&ev).parse::<u32>() {
		Ok(len) => set_options.update(|o| o.max_label_length = len),
		Err(err) => log::debug!("ignoring label length input: {err}"),
	};

	view! {
		<div class="config-generator">
			<div class="config-form">
				<label>
					"Output format"
					<select on:change=on_format>
						{OutputFormat::ALL
							.iter()
							.map(|format| {
								view! {
									<option value=format.as_str() selected={*format == OutputFormat::default()}>
										{format.as_str()}
									</option>
								}
							})
							.collect_view()}
					</select>
				</label>
				<label>
					"Theme"
					<select
						on:change=on_theme
						disabled=move || options.get().format != OutputFormat::Html
					>
						<option value="dark" selected=true>"dark"</option>
						<option value="light">"light"</option>
					</select>
				</label>
				<label class="config-checkbox">
					<input type="checkbox" checked=true on:change=on_physics />
					"Physics simulation"
				</label>
				<label>
					"Max label length"
					<input
						type="number"
						min=ConfigOptions::LABEL_RANGE.start().to_string()
						max=ConfigOptions::LABEL_RANGE.end().to_string()
						value=ConfigOptions::default().max_label_length.to_string()
						on:input=on_label
					/>
				</label>
			</div>
			<CodeBlock language="toml" code=snippet download_as=CONFIG_FILE_NAME />
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_snippet() {
		assert_eq!(
			ConfigOptions::default().to_string(),
			"# .tfgraph.toml\n\
			 [output]\n\
			 format = \"html\"\n\
			 theme = \"dark\"\n\
			 \n\
			 [graph]\n\
			 physics = true\n\
			 max_label_length = 25"
		);
	}

	#[test]
	fn theme_only_applies_to_html() {
		let opts = ConfigOptions {
			format: OutputFormat::Json,
			theme: Theme::Light,
			physics: false,
			max_label_length: 18,
		};
		let snippet = opts.to_string();
		assert!(snippet.contains("format = \"json\""));
		assert!(!snippet.contains("theme"));
		assert!(snippet.contains("physics = false"));
		assert!(snippet.ends_with("max_label_length = 18"));
	}

	#[test]
	fn label_length_is_clamped() {
		let short = ConfigOptions {
			max_label_length: 2,
			..ConfigOptions::default()
		};
		assert_eq!(short.normalized().max_label_length, 8);
		let long = ConfigOptions {
			max_label_length: 500,
			..ConfigOptions::default()
		};
		assert!(long.to_string().ends_with("max_label_length = 64"));
	}

	#[test]
	fn formats_parse_back() {
		for format in OutputFormat::ALL {
			assert_eq!(OutputFormat::parse(format.as_str()), Some(format));
		}
		assert_eq!(OutputFormat::parse("yaml"), None);
	}
}
