mod arrangement;
mod design_item;
mod instance;
mod placed_item;
mod settings;

#[doc(inline)]
pub use arrangement::ArrangementResult;
#[doc(inline)]
pub use design_item::DesignItem;
#[doc(inline)]
pub use design_item::Priority;
#[doc(inline)]
pub use instance::SheetInstance;
#[doc(inline)]
pub use placed_item::PlacedItem;
#[doc(inline)]
pub use settings::LayoutSettings;
