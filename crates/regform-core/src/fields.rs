//! Wire names of every form field, as the form-rendering side sends them.

pub const FULL_NAME: &str = "fullName";
pub const PERSONAL_PHOTO: &str = "personalPhoto";
pub const EMAIL: &str = "email";
pub const MOBILE: &str = "mobile";
pub const LINKEDIN: &str = "linkedin";
pub const CITY_OF_BIRTH: &str = "cityOfBirth";

pub const FACULTY: &str = "faculty";
pub const UNIVERSITY: &str = "university";
pub const TRACK_NAME: &str = "trackName";
pub const BRANCH: &str = "branch";
pub const PROGRAM: &str = "program";
pub const ITI_GRADUATION_YEAR: &str = "itiGraduationYear";
pub const INTAKE: &str = "intake";
pub const ROUND: &str = "round";

pub const PREFERRED_TEACHING_BRANCHES: &str = "preferredTeachingBranches";
pub const PREFERRED_COURSES_TO_TEACH: &str = "preferredCoursesToTeach";
pub const INTERESTED_IN_TEACHING: &str = "interestedInTeaching";

pub const IS_EMPLOYED: &str = "isEmployed";
pub const FULL_JOB_TITLE: &str = "fullJobTitle";
pub const COMPANY_NAME: &str = "companyName";
pub const YEARS_OF_EXPERIENCE: &str = "yearsOfExperience";
pub const HAS_FREELANCE_EXPERIENCE: &str = "hasFreelanceExperience";
pub const FREELANCING_INCOME: &str = "freelancingIncome";
