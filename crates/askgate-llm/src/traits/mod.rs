mod model;

pub use model::TextModel;
