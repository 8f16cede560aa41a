pub mod file_item_repository;
