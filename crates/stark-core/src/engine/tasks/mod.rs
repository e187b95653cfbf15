pub mod frame_field;
