mod errors;
mod options;
mod properties;
mod reports;
