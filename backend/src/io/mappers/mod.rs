pub mod account_mapper;

pub use account_mapper::AccountMapper;
