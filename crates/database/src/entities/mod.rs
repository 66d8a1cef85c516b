pub mod advisors;
pub mod capacity_overrides;
pub mod class_sections;
pub mod courses;
pub mod department_permissions;
pub mod departments;
pub mod enrollments;
pub mod instructors;
pub mod prerequisite_waivers;
pub mod registration_holds;
pub mod registration_schedules;
pub mod student_majors;
pub mod students;
pub mod terms;
pub mod time_conflict_waivers;
