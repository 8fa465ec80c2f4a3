pub mod metrics;
pub mod notas;
pub mod repository;
pub mod tax;

pub use metrics::{get_metrics, init_metrics};
pub use notas::NotasClient;
pub use repository::TributoRepository;
