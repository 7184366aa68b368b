/// Linear RGB color arithmetic used by the shading code and the film.
pub mod color;
