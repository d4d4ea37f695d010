//! Hero console that types out a scripted terminal session.

use std::time::Duration;

use leptos::prelude::*;

const TICK: Duration = Duration::from_millis(45);

/// How a scripted line is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
	/// Typed character by character after a prompt.
	Command,
	/// Printed at once.
	Output,
	/// Printed at once, highlighted.
	Success,
}

/// One line of the console script.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConsoleLine {
	/// Display style.
	pub kind: LineKind,
	/// Line text without the prompt.
	pub text: &'static str,
}

impl ConsoleLine {
	/// A typed command.
	pub const fn command(text: &'static str) -> Self {
		Self {
			kind: LineKind::Command,
			text,
		}
	}

	/// Plain output.
	pub const fn output(text: &'static str) -> Self {
		Self {
			kind: LineKind::Output,
			text,
		}
	}

	/// Highlighted output.
	pub const fn success(text: &'static str) -> Self {
		Self {
			kind: LineKind::Success,
			text,
		}
	}
}

/// Default hero script.
pub const HERO_SCRIPT: &[ConsoleLine] = &[
	ConsoleLine::command("tfgraph ./infra"),
	ConsoleLine::output("parsed 42 files in 3 modules"),
	ConsoleLine::output("resolved 118 resources, 36 variables, 12 outputs"),
	ConsoleLine::output("warning: 4 unused variables, 1 orphan resource"),
	ConsoleLine::success("wrote tfgraph-report.html"),
	ConsoleLine::command("tfgraph ./infra --format json | jq '.stats'"),
	ConsoleLine::output("{ \"nodes\": 166, \"edges\": 241, \"components\": 3 }"),
];

/// Progress through a console script. Advance with [`Typewriter::tick`].
#[derive(Clone, Debug)]
pub struct Typewriter {
	script: &'static [ConsoleLine],
	line: usize,
	chars: usize,
	pause: u32,
	pause_ticks: u32,
}

impl Typewriter {
	/// Ticks to wait after finishing a line before starting the next.
	pub const DEFAULT_PAUSE_TICKS: u32 = 8;

	/// Starts before the first line of `script`.
	pub fn new(script: &'static [ConsoleLine]) -> Self {
		Self {
			script,
			line: 0,
			chars: 0,
			pause: 0,
			pause_ticks: Self::DEFAULT_PAUSE_TICKS,
		}
	}

	/// Overrides the pause between lines.
	pub fn with_pause(mut self, ticks: u32) -> Self {
		self.pause_ticks = ticks;
		self
	}

	/// Whether the whole script is shown.
	pub fn is_done(&self) -> bool {
		self.line >= self.script.len()
	}

	/// Advances one step. Returns false once the script is finished.
	pub fn tick(&mut self) -> bool {
		let Some(current) = self.script.get(self.line) else {
			return false;
		};
		if self.pause > 0 {
			self.pause -= 1;
			if self.pause == 0 {
				self.line += 1;
				self.chars = 0;
			}
			return true;
		}
		let len = current.text.chars().count();
		self.chars = match current.kind {
			LineKind::Command => (self.chars + 1).min(len),
			LineKind::Output | LineKind::Success => len,
		};
		if self.chars == len {
			if self.pause_ticks == 0 {
				self.line += 1;
				self.chars = 0;
			} else {
				self.pause = self.pause_ticks;
			}
		}
		true
	}

	/// Lines to render: finished lines in full, then the partial current line.
	pub fn visible(&self) -> Vec<(LineKind, &'static str)> {
		let mut lines: Vec<_> = self
			.script
			.iter()
			.take(self.line)
			.map(|l| (l.kind, l.text))
			.collect();
		if let Some(current) = self.script.get(self.line) {
			let end = current
				.text
				.char_indices()
				.nth(self.chars)
				.map_or(current.text.len(), |(i, _)| i);
			if end > 0 || current.kind == LineKind::Command {
				lines.push((current.kind, &current.text[..end]));
			}
		}
		lines
	}
}

/// Terminal window that plays a console script.
#[component]
pub fn TypedConsole(
	/// Lines to play.
	#[prop(default = HERO_SCRIPT)]
	script: &'static [ConsoleLine],
	/// Window title.
	#[prop(default = "~/infra")]
	title: &'static str,
) -> impl IntoView {
	let (writer, set_writer) = signal(Typewriter::new(script));

	let step = move || {
		set_writer.update(|w| {
			w.tick();
		})
	};
	match set_interval_with_handle(step, TICK) {
		Ok(handle) => on_cleanup(move || handle.clear()),
		Err(err) => {
			log::warn!("console animation disabled: {}", crate::error::js_message(&err));
			set_writer.update(|w| while w.tick() {});
		}
	}

	view! {
		<div class="hero-terminal">
			<div class="terminal-header">
				<div class="terminal-dot red"></div>
				<div class="terminal-dot yellow"></div>
				<div class="terminal-dot green"></div>
				<span class="terminal-title">{title}</span>
			</div>
			<div class="terminal-body">
				{move || {
					let writer = writer.get();
					let done = writer.is_done();
					let lines = writer.visible();
					let last = lines.len().saturating_sub(1);
					lines
						.into_iter()
						.enumerate()
						.map(|(i, (kind, text))| match kind {
							LineKind::Command => {
								view! {
									<div class="terminal-line">
										<span class="terminal-prompt">"$"</span>
										<span class="terminal-command">{text}</span>
										<Show when=move || !done && i == last>
											<span class="terminal-cursor">"_"</span>
										</Show>
									</div>
								}
									.into_any()
							}
							LineKind::Output => {
								view! { <div class="terminal-output">{text}</div> }.into_any()
							}
							LineKind::Success => {
								view! { <div class="terminal-output success">{text}</div> }.into_any()
							}
						})
						.collect_view()
				}}
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SCRIPT: &[ConsoleLine] = &[ConsoleLine::command("ls"), ConsoleLine::output("a b")];

	#[test]
	fn commands_type_one_char_per_tick() {
		let mut w = Typewriter::new(SCRIPT).with_pause(0);
		assert_eq!(w.visible(), vec![(LineKind::Command, "")]);
		w.tick();
		assert_eq!(w.visible(), vec![(LineKind::Command, "l")]);
		w.tick();
		assert_eq!(w.visible(), vec![(LineKind::Command, "ls")]);
		w.tick();
		assert_eq!(
			w.visible(),
			vec![(LineKind::Command, "ls"), (LineKind::Output, "a b")]
		);
		assert!(w.is_done());
		assert!(!w.tick());
	}

	#[test]
	fn pause_holds_finished_line() {
		let mut w = Typewriter::new(SCRIPT).with_pause(2);
		w.tick();
		w.tick();
		w.tick();
		assert_eq!(w.visible(), vec![(LineKind::Command, "ls")]);
		w.tick();
		assert_eq!(w.visible(), vec![(LineKind::Command, "ls")]);
		w.tick();
		assert!(!w.is_done());
	}

	#[test]
	fn multibyte_text_is_cut_on_char_boundaries() {
		const UNICODE: &[ConsoleLine] = &[ConsoleLine::command("żółw")];
		let mut w = Typewriter::new(UNICODE);
		w.tick();
		w.tick();
		assert_eq!(w.visible(), vec![(LineKind::Command, "żó")]);
	}

	#[test]
	fn hero_script_finishes() {
		let mut w = Typewriter::new(HERO_SCRIPT);
		let mut ticks = 0;
		while w.tick() {
			ticks += 1;
			assert!(ticks < 10_000);
		}
		assert_eq!(w.visible().len(), HERO_SCRIPT.len());
	}
}
