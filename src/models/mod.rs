pub mod loaders;
pub mod money;
pub mod profile;
pub mod record;

pub use loaders::load_profile_from_toml;
pub use money::Money;
pub use profile::{FieldRole, FormProfile, RoleBinding};
pub use record::{FieldValue, Record};
