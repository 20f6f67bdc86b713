mod build;
mod expand;
mod list;
