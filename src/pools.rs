// 📚 Sample Pools - static reference lists sampled by the synthesizer
// Pure data, no logic.

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda",
    "David", "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica",
    "Thomas", "Sarah", "Christopher", "Karen", "Daniel", "Nancy", "Matthew", "Lisa",
    "Anthony", "Betty", "Mark", "Helen", "Donald", "Sandra", "Paul", "Donna",
    "Joshua", "Carol", "Kenneth", "Ruth", "Kevin", "Sharon", "Brian", "Michelle",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
    "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson",
];

pub const COMPANIES: &[&str] = &[
    "TechCorp Solutions", "Global Dynamics Inc", "InnovateNow LLC", "DataFlow Systems",
    "CloudFirst Technologies", "NextGen Industries", "ProActive Services", "SmartTech Innovations",
    "FutureWorks Ltd", "DigitalEdge Corp", "Synergy Partners", "Quantum Ventures",
    "Alpha Systems", "Beta Networks", "Gamma Industries", "Delta Solutions",
];

pub const JOB_TITLES: &[&str] = &[
    "Software Engineer", "Marketing Manager", "Sales Representative", "Project Manager",
    "Data Analyst", "HR Specialist", "Financial Advisor", "Operations Director",
    "Product Manager", "Business Analyst", "DevOps Engineer", "UX Designer",
    "Quality Assurance", "Account Executive", "Technical Writer", "System Administrator",
];

pub const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia",
    "San Antonio", "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville",
    "Fort Worth", "Columbus", "Charlotte", "Seattle", "Denver", "Boston",
];

pub const UNIVERSITIES: &[&str] = &[
    "MIT", "Stanford University", "Harvard University", "UC Berkeley", "Carnegie Mellon",
    "University of Chicago", "Northwestern", "Yale University", "Princeton", "Columbia University",
    "Cornell University", "University of Pennsylvania", "Duke University", "Caltech",
    "Johns Hopkins", "University of Michigan", "Georgia Tech", "Rice University",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "gmail.com", "yahoo.com", "hotmail.com", "outlook.com", "icloud.com",
    "protonmail.com", "aol.com", "live.com", "msn.com", "comcast.net",
];

pub const INDUSTRIES: &[&str] = &[
    "Technology", "Finance", "Healthcare", "Manufacturing", "Consulting",
    "Education", "Retail", "Media", "Transportation", "Energy",
];

pub const COMPANY_SIZES: &[&str] = &["10-50", "51-200", "201-1000", "1000+"];

pub const DEPARTMENTS: &[&str] = &["Engineering", "Sales", "Marketing", "HR", "Finance"];
