pub mod cubic;
mod cubic_masks;
