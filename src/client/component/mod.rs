pub mod footer;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod protected_layout;

pub use footer::Footer;
pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::Page;
pub use protected_layout::RequiresLoggedIn;
