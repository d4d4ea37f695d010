use leptos::prelude::*;

use crate::components::code_block::CodeBlock;
use crate::components::config_generator::ConfigGenerator;
use crate::components::embed::EmbeddedReport;
use crate::components::scroll_spy::{DocSection, DocsSidebar};
use crate::sections::{Footer, Nav};

const SECTIONS: &[DocSection] = &[
	DocSection {
		id: "install",
		title: "Installation",
	},
	DocSection {
		id: "usage",
		title: "Usage",
	},
	DocSection {
		id: "reading-the-graph",
		title: "Reading the graph",
	},
	DocSection {
		id: "output",
		title: "Output formats",
	},
	DocSection {
		id: "configuration",
		title: "Configuration",
	},
	DocSection {
		id: "example-report",
		title: "Example report",
	},
];

const INSTALL: &str = "cargo install tfgraph\n# or\nbrew install tfgraph/tap/tfgraph";

const USAGE: &str = "\
tfgraph ./infra                  # HTML report, opens in browser
tfgraph ./infra --format json    # machine-readable graph
tfgraph ./infra --fail-on orphan # CI gate";

const OUTPUT: &str = "\
tfgraph ./infra --format dot | dot -Tsvg > graph.svg
tfgraph ./infra --format mermaid >> README.md";

/// Documentation page with sidebar navigation.
#[component]
pub fn Docs() -> impl IntoView {
	view! {
		<Nav />
		<div class="docs-layout container">
			<DocsSidebar sections=SECTIONS />
			<article class="docs-content">
				<section id="install">
					<h2>"Installation"</h2>
					<p>"tfgraph ships as a single binary. Install it from crates.io or Homebrew."</p>
					<CodeBlock language="bash" code=INSTALL.to_string() />
				</section>
				<section id="usage">
					<h2>"Usage"</h2>
					<p>"Point tfgraph at a directory containing Terraform files."</p>
					<CodeBlock language="bash" code=USAGE.to_string() />
				</section>
				<section id="reading-the-graph">
					<h2>"Reading the graph"</h2>
					<p>
						"Fill color shows the block type: resources, modules, variables, outputs, "
						"data sources and providers each have their own color. The ring shows state: "
						"healthy, unused, external, leaf, orphan or warning."
					</p>
					<p>
						"Click a node to highlight it with its direct dependencies; click it again to "
						"clear. Drag to pin a node, scroll to zoom, drag the background to pan. "
						"Turning physics off freezes the layout so you can arrange nodes by hand."
					</p>
				</section>
				<section id="output">
					<h2>"Output formats"</h2>
					<p>"Besides the HTML report, the graph can be written as JSON, DOT or Mermaid."</p>
					<CodeBlock language="bash" code=OUTPUT.to_string() />
				</section>
				<section id="configuration">
					<h2>"Configuration"</h2>
					<p>
						"Defaults can be stored in a .tfgraph.toml next to your modules. "
						"Pick options below and copy or download the result."
					</p>
					<ConfigGenerator />
				</section>
				<section id="example-report">
					<h2>"Example report"</h2>
					<EmbeddedReport src="/report/example.html" title="tfgraph example report" />
				</section>
			</article>
		</div>
		<Footer />
	}
}
