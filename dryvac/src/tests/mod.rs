// Matcher tests
mod matcher;
