mod booking;
mod contact_message;
mod gallery_image;
mod intake_form;
mod service;

pub use booking::*;
pub use contact_message::*;
pub use gallery_image::*;
pub use intake_form::*;
pub use service::*;
