// 統合テストのエントリーポイント

#[path = "../fixtures/mod.rs"]
mod fixtures;

mod test_batch_runner;
mod test_error_handling;
mod test_main_entry_point;
