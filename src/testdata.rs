// src/testdata.rs
//! Export fixtures shared by the unit tests.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub fn init_test_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,firebase_stats=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub const TWO_SECTION: &str = "\
# ----------------------------------------
# Firebase Analytics
# Dashboard
# All Users
# 20230101-20230331
# ----------------------------------------

Day,28-Day,7-Day,1-Day
0000,214,69,19
0001,213,70,22
0002,212,66,20
0003,211,64,85

# ----------------------------------------
# Daily engagement
# ----------------------------------------
Day,Average engagement time
0000,128.46043165467626
0001,131.2
0002,140.03
0003,158.41666666666666
";

pub const APP: &str = "\
# ----------------------------------------
# Firebase Analytics
# Dashboard
# All Users
# 20230101-20230331
# ----------------------------------------

Day,28-Day,7-Day,1-Day
0000,2569,741,139
0001,2570,745,150
0002,2590,760,161

Day,Average engagement time
0000,128.46043165467626
0001,130.5
0002,158.41666666666666

Page path and screen class,User engagement,Screen views
MainActivity,8123.5,10422
\"SettingsActivity, compact\",211,380
OnboardingFragment,90,120

Day,Total revenue

App,Crash-free users
com.example.app,0.9981
com.example.app.beta,0.9712
com.example.ios,0.9990
com.example.ios.beta,0.9800

App,Version,Status
com.example.app,4.2.0,Latest
com.example.app,4.1.3,
com.example.ios,4.2.0,Latest

Source,first_open conversions,LTV
google-play,15020,0.42
(direct),9011,0.31
apple-search-ads,4230,0.77
facebook,1003,0.12
(not set),77,0

Date,Week 0,Week 1,Week 2,Week 3,Week 4,Week 5
20230101-20230107,1,0.21,0.15,0.12,0.1,0.09
20230108-20230114,1,0.22,0.16,0.12,0.11,
20230115-20230121,1,0.2,0.14,0.11,,
20230122-20230128,1,0.23,0.15,,,
20230129-20230204,1,0.19,,,,
20230205-20230211,1,,,,,

Country ID,Sessions,% Total
US,51234,0.41
GB,20011,0.16
DE,12002,0.1

Device model,Users
iPhone 14,900
SM-G991B,800
iPad Pro (11-inch),500
Pixel 7,400
iPhone 13,350
SM-A515F,300
Pixel 6a,250
iPod touch,200
moto g(30),150
Redmi Note 8,120
CPH2127,100
SM-A125F,90
Nokia 5.3,80

OS with version,Users
Android 13,4000
iOS 16.4.1,2500
iOS 17.0.2,1500
Android 12,1000
iOS 16.1,500
iOS 9.3.5,250
Android 10,250

Gender,Users
female,395692
male,348442

Category,Female,Male
18-24,0.5012,0.4988
25-34,0.47,0.53
35-44,0.4417,0.5583
45-54,0.39,0.61
55-64,0.4,0.6
65+,0.52,0.48

Platform,Users
ANDROID,907909
IOS,874454

Platform,Users,% Total,User engagement,Total revenue
ANDROID,907909,0.5093850130416756,81.9344448501075,0
IOS,874454,0.49061498695832445,70.1780268220262,0
";

pub const OLD_GENDER_AGE: &str = "\
# Gender by age
Category,Female,Male
18-24,0.5012,0.4988
25-34,0.47,0.53
35-44,0.4417,0.5583
45-54,0.39,0.61
";

pub const OLD_GENDER_AGE_ALT: &str = "\
# Gender by age
Category,Male,Female
18-24,0.4988,0.5012
25-34,0.53,0.47
35-44,0.5583,0.4417
45-54,0.61,0.39
";

pub const NEW_GENDER_AGE: &str = "\
# Gender by age
Category,Male,Female,Other
18-24,0.45,0.5,0.05
25-34,0.5,0.48,0.02
35-44,0.52,0.47,0.01
45-54,0.55,0.44,0.01
55-64,0.58,0.42,0
65+,0.6,0.4,
unknown,0.33,0.33,0.34
";
