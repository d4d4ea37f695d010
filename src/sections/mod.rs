//! Landing page sections.

/// Version string shown across the site.
pub const VERSION: &str = "v0.3.0";

/// Repository link used by nav, hero and footer.
pub const REPO_URL: &str = "https://github.com/tfgraph/tfgraph";

mod features;
mod footer;
mod hero;
mod nav;
mod showcase;
mod support;

pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use showcase::Showcase;
pub use support::Support;
