pub mod card;
pub mod carousel;
pub mod reveal;
pub mod source;
pub mod truncation;
