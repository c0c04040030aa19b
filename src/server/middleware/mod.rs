pub mod auth;
pub mod https;
pub mod logging;
pub mod session;

#[cfg(test)]
mod test;
