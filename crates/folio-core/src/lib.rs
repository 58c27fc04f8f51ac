#![deny(unsafe_code)]

pub mod carousel;
pub mod config;
pub mod error;
pub mod navigation;
pub mod observer;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod sections;
pub mod store;

pub use carousel::{CarouselController, CarouselState, Direction, PageDot};
pub use config::{CarouselConfig, RevealConfig, SectionsConfig, ViewConfig};
pub use error::ConfigError;
pub use navigation::{KEYWORD_GROUPS, Navigation, resolve_search};
pub use observer::{GeometryObserver, IntersectionEntry, IntersectionHandler, ObserverOptions};
pub use page::{
    CarouselGeometry, Lifecycle, PageEvent, PageLayout, PageSnapshot, Portfolio, RevealTarget,
    ViewChange,
};
pub use reveal::RevealTracker;
pub use scroll::{ScrollBehavior, ScrollRequest, ScrollTarget};
pub use sections::SectionTracker;
pub use store::{Theme, ViewState};
