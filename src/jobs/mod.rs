pub mod daily_position_sync;
