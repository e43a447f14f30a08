mod use_root_class;

pub use use_root_class::use_root_class;
