pub mod popover;
