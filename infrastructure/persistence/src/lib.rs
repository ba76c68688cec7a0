pub mod history {
    pub mod entity;
    pub mod repository;
}
