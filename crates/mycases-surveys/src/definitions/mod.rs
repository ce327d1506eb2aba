pub mod communication;
pub mod daily_routine;
pub mod first_assessment;
pub mod motor_skills;
pub mod social_interaction;
