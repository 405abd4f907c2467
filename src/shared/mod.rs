//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Editor-Optionen, die von `app` und `ui` gemeinsam genutzt werden.

pub mod options;

pub use options::EditorOptions;
