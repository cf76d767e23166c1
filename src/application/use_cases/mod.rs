mod load_tree;

pub use load_tree::LoadTargetTreeUseCase;
