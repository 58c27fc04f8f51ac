pub mod content;
pub mod error;
pub mod geometry;
pub mod ids;
pub mod section;

pub use content::{
    ContactInfo, ContactLink, ContentTable, Experience, Principle, Profile, Project, SkillCategory,
};
pub use error::{ModelError, Result};
pub use geometry::{MarginValue, Rect, RootMargin, Viewport};
pub use ids::ProjectId;
pub use section::{NAV_ITEMS, NavItem, SectionId};
