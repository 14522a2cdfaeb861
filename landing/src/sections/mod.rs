// Page shell sections
// Developed by the Meridian Web Team (c)2025

mod contact;
mod footer;
mod nav;
mod page;
mod search;
mod tilt_card;
mod toast;

pub use contact::ContactForm;
pub use footer::Footer;
pub use nav::Nav;
pub use page::PageSection;
pub use search::SearchOverlay;
pub use tilt_card::TiltCard;
pub use toast::Toast;

/// Brand name shown in the nav and footer.
pub const BRAND: &str = "Meridian";
