pub mod suffix_array;

pub use suffix_array::{SubstringIndex, SuffixArrayBuilder, SuffixArrayConfig};
