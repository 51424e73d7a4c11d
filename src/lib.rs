//! Static site generator with a shared page shell.

mod assets;
mod clock;
pub mod components;
mod config;
mod markdown;
pub mod path;
pub mod site;
mod style;
mod typography;

pub use assets::{CODE_THEME, SITE_CSS, code_theme_css, write_css_assets};
pub use clock::{Clock, FixedClock, SystemClock};
pub use components::footer::Attribution;
pub use components::header::{ACCENT_COLOR, HeaderVariant};
pub use components::layout::{LayoutProps, Location, SiteContext, layout};
pub use config::Config;
pub use markdown::{FrontMatter, MarkdownRenderer, RenderedMarkdown};
pub use site::{BuildReport, Page, build};
pub use style::Style;
pub use typography::Typography;
