pub mod catalog;
pub mod passwords;
pub mod seeder;
