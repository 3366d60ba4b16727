//! Core data model shared by the classifier, compiler and renderer.

pub mod ast;
pub mod html;
