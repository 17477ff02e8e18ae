pub mod rotational;
pub mod translational;

pub use rotational::RotationalUpdate;
pub use translational::TranslationalUpdate;
