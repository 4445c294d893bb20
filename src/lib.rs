pub mod words_output;
