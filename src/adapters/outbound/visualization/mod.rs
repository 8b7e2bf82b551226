/// Visualization adapters - merged model writer for the external viewer
pub mod vtkjs_writer;

pub use vtkjs_writer::VtkJsSceneWriter;
