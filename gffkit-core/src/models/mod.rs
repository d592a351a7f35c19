pub mod document;
pub mod feature;
pub mod scaffold;

// re-export for cleaner imports
pub use self::document::GffDocument;
pub use self::feature::Feature;
pub use self::scaffold::Scaffold;
