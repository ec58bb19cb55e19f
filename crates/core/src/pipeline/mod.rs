pub mod stylize_image_use_case;
