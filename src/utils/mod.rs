pub mod selecthandler;
