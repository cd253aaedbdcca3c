//! The four step schemas of the registration form.

mod employment;
mod enrollment;
mod identity;
mod teaching;

pub use employment::employment_schema;
pub use enrollment::enrollment_schema;
pub use identity::identity_schema;
pub use teaching::teaching_schema;
