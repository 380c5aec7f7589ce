//! Database models

pub mod funcionario;
pub mod grupo_familiar;
pub mod serde_helpers;

pub use funcionario::{Funcionario, FuncionarioCreate, FuncionarioId, FuncionarioUpdate};
pub use grupo_familiar::{
    GrupoFamiliar, GrupoFamiliarActualizado, GrupoFamiliarCreate, GrupoFamiliarCriterios,
    GrupoFamiliarEliminado, GrupoFamiliarId, GrupoFamiliarUpdate,
};
