pub mod prompts;
pub mod render;

pub use prompts::{
    collect_plan_inputs, prompt_degrees, prompt_meat, prompt_number, prompt_serve_time,
    prompt_smoker_temp, prompt_wrap, prompt_yes_no,
};
pub use render::{display_catalog, display_no_plan, display_plan, write_timeline_csv};
