pub mod prompts;
pub mod render;

pub use prompts::{
    collect_plan_request, prompt_caloric_intake, prompt_fitness_goal, prompt_list,
    prompt_macro_ratios, prompt_yes_no, split_list,
};
pub use render::{display_maze_report, display_plan, render_maze_report, render_plan};
