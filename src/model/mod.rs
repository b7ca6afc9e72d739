mod handle;
mod registry;
mod seq_fdd;

pub use handle::ModelHandle;
pub use registry::{architecture, KNOWN_MODELS};
pub use seq_fdd::{SeqFdd, SeqFddConfig};
