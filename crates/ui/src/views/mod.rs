mod landing;
mod nav;
mod not_found;
mod notices;
mod pronunciation;
mod quiz;

pub use landing::LandingView;
pub use nav::{SiteFooter, SiteNav, use_section_scroll};
pub use not_found::NotFoundView;
pub use notices::NoticeStack;
pub use pronunciation::PronunciationView;
pub use quiz::QuizPanel;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
