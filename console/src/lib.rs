pub mod backend;
pub mod console;
pub mod console_arguments;
pub mod form;
pub mod page;
pub mod routes;
pub mod upload;
pub mod view;

#[cfg(test)]
mod testing;
