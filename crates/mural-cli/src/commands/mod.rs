pub mod auth;
pub mod cursos;
pub mod dispatch;
pub mod habilidades;
pub mod vaga;
pub mod vagas;
