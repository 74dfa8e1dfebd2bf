pub mod synthetic_survey;
