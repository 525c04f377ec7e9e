// pulls in the statically linked OpenBLAS that the `blas` bindings resolve against
extern crate openblas_src;

pub mod checked;
pub mod driver;
pub mod error;
pub mod routines;
