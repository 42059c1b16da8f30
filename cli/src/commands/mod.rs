mod audit;
mod play;
mod simulate;
mod suggest;

pub use audit::audit;
pub use play::play;
pub use simulate::simulate;
pub use suggest::suggest;
