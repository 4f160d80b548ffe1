pub mod catalog;
pub mod composer;
pub mod corpus;
pub mod keywords;
pub mod normalizer;
pub mod pipeline;
pub mod recommendations;
pub mod similarity;
pub mod stopwords;

pub use catalog::{CatalogSource, CsvCatalog};
pub use corpus::Corpus;
pub use keywords::{KeywordExtractor, KeywordMode};
pub use recommendations::{Recommendation, Recommender};
