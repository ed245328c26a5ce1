/// External representations of requests and results, as they appear on the wire
pub mod ext_repr;

mod export;
mod import;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use import::import;
