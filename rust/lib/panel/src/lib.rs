pub mod atomic;
pub mod config;
pub mod edging;
pub mod error;
pub mod panel;
pub mod save;
pub mod scene;
pub mod table;
pub mod traits;
pub mod xlsx;

pub use atomic::StagedFile;
pub use config::LedgerConfig;
pub use edging::{EdgeFlags, EdgeSide, EdgingEntry, EdgingMap};
pub use error::LedgerError;
pub use panel::{classify, MaterialKind, PanelRecord};
pub use save::{save_batch, SaveReport, WrittenPanel};
pub use scene::{Dimensions, ObjectKind, SceneObject, SceneSnapshot};
pub use table::{Cell, Table, UpsertOutcome};
pub use traits::TableStore;
pub use xlsx::XlsxStore;
