//! 内置文案表
//!
//! 键为 snake_case；英文必填，其它语言缺失时回退到英文。

pub(super) struct Entry {
    pub en: &'static str,
    pub hi: Option<&'static str>,
    pub te: Option<&'static str>,
}

macro_rules! tr {
    ($key:literal, $en:literal) => {
        (
            $key,
            Entry {
                en: $en,
                hi: None,
                te: None,
            },
        )
    };
    ($key:literal, $en:literal, $hi:literal, $te:literal) => {
        (
            $key,
            Entry {
                en: $en,
                hi: Some($hi),
                te: Some($te),
            },
        )
    };
}

pub(super) static CATALOG: &[(&str, Entry)] = &[
    // 导航
    tr!("sign_in", "Sign In", "साइन इन करें", "సైన్ ఇన్"),
    tr!("get_started", "Get Started", "शुरू करें", "ప్రారంభించండి"),
    tr!("toggle_theme", "Toggle theme", "थीम बदलें", "థీమ్ మార్చండి"),
    tr!("hero_title", "Protect Your Crops", "अपनी फसलों की रक्षा करें", "మీ పంటలను రక్షించుకోండి"),
    tr!("hero_subtitle", "with Smart Detection", "स्मार्ट डिटेक्शन के साथ", "స్మార్ట్ డిటెక్షన్ తో"),
    tr!("hero_description", "Upload a leaf image and get accurate disease diagnosis in seconds. Powered by cutting-edge Convolutional Neural Networks (CNN) and image recognition technology to help farmers, students, and researchers protect crops and increase yields.", "एक पत्ती की छवि अपलोड करें और सेकंडों में सटीक रोग निदान प्राप्त करें। किसानों, छात्रों और शोधकर्ताओं को फसलों की रक्षा करने और उपज बढ़ाने में मदद करने के लिए अत्याधुनिक कन्वोल्यूशनल न्यूरल नेटवर्क (CNN) और छवि पहचान तकनीक द्वारा संचालित।", "ఒక ఆకు చిత్రాన్ని అప్‌లోడ్ చేసి సెకన్లలో ఖచ్చితమైన వ్యాధి నిర్ధారణ పొందండి. రైతులు, విద్యార్థులు మరియు పరిశోధకులు పంటలను రక్షించడానికి మరియు దిగుబడి పెంచడానికి సహాయపడటానికి అత్యాధునిక కన్వల్యూషనల్ న్యూరల్ నెట్‌వర్క్‌లు (CNN) మరియు చిత్ర గుర్తింపు సాంకేతికతతో శక్తివంతం."),
    tr!("detect_now", "Detect Now", "अभी पता लगाएं", "ఇప్పుడు గుర్తించండి"),
    tr!("start_detection", "Start Detection Now", "अभी डिटेक्शन शुरू करें", "ఇప్పుడు గుర్తింపు ప్రారంభించండి"),
    tr!("learn_how", "Learn How It Works", "यह कैसे काम करता है जानें", "ఇది ఎలా పనిచేస్తుందో తెలుసుకోండి"),
    // 统计
    tr!("accuracy", "Accuracy", "सटीकता", "ఖచ్చితత్వం"),
    tr!("detection_time", "Detection Time", "डिटेक्शन समय", "గుర్తింపు సమయం"),
    tr!("diseases", "Diseases", "रोग", "వ్యాధులు"),
    // 特性
    tr!("why_choose", "Why Choose AICDD", "AICDD क्यों चुनें", "AICDD ఎందుకు ఎంచుకోవాలి"),
    tr!("advanced_tech", "Advanced AI technology designed for farmers and researchers", "किसानों और शोधकर्ताओं के लिए डिज़ाइन की गई उन्नत AI तकनीक", "రైతులు మరియు పరిశోధకుల కోసం రూపొందించబడిన అధునాతన AI సాంకేతికత"),
    tr!("ai_powered", "AI-Powered CNN", "AI-संचालित CNN", "AI-శక్తివంతమైన CNN"),
    tr!("ai_powered_desc", "Deep learning Convolutional Neural Networks trained on thousands of plant disease images", "हजारों पौधों की बीमारी छवियों पर प्रशिक्षित डीप लर्निंग कन्वोल्यूशनल न्यूरल नेटवर्क", "వేలాది మొక్కల వ్యాధి చిత్రాలపై శిక్షణ పొందిన డీప్ లెర్నింగ్ కన్వల్యూషనల్ న్యూరల్ నెట్‌వర్క్‌లు"),
    tr!("real_time", "Real-Time Detection", "रियल-टाइम डिटेक्शन", "రియల్-టైమ్ గుర్తింపు"),
    tr!("real_time_desc", "Upload a leaf photo and get instant disease identification within seconds", "एक पत्ती की फोटो अपलोड करें और सेकंडों में तत्काल रोग पहचान प्राप्त करें", "ఒక ఆకు ఫోటో అప్‌లోడ్ చేసి సెకన్లలో తక్షణ వ్యాధి గుర్తింపు పొందండి"),
    tr!("high_accuracy", "95%+ Accuracy", "95%+ सटीकता", "95%+ ఖచ్చితత్వం"),
    tr!("high_accuracy_desc", "Industry-leading accuracy across 50+ crop diseases including blight, rust, and leaf spot", "ब्लाइट, रस्ट और लीफ स्पॉट सहित 50+ फसल रोगों में उद्योग-अग्रणी सटीकता", "బ్లైట్, రస్ట్ మరియు లీఫ్ స్పాట్‌తో సహా 50+ పంట వ్యాధులలో పరిశ్రమ-ప్రముఖ ఖచ్చితత్వం"),
    tr!("treatment", "Treatment Advice", "उपचार सलाह", "చికిత్స సలహా"),
    tr!("treatment_desc", "Receive detailed remedies, prevention tips, and sustainable farming recommendations", "विस्तृत उपचार, रोकथाम युक्तियां और टिकाऊ खेती की सिफारिशें प्राप्त करें", "వివరణాత్మక చికిత్సలు, నివారణ చిట్కాలు మరియు స్థిరమైన వ్యవసాయ సిफార్సులు పొందండి"),
    // 使用步骤
    tr!("how_it_works", "How It Works", "यह कैसे काम करता है", "ఇది ఎలా పనిచేస్తుంది"),
    tr!("three_steps", "Three simple steps to diagnose crop diseases with AI", "AI के साथ फसल रोगों का निदान करने के तीन सरल चरण", "AI తో పంట వ్యాధులను నిర్ధారించడానికి మూడు సులభ దశలు"),
    tr!("upload_leaf", "Upload Leaf Image", "पत्ती की छवि अपलोड करें", "ఆకు చిత్రం అప్‌లోడ్ చేయండి"),
    tr!("upload_desc", "Take or upload a clear photo of the crop leaf showing disease symptoms. Works with any device - phone, tablet, or computer.", "रोग के लक्षण दिखाने वाली फसल की पत्ती की स्पष्ट तस्वीर लें या अपलोड करें। किसी भी डिवाइस - फोन, टैबलेट या कंप्यूटर के साथ काम करता है।", "వ్యాధి లక్షణాలను చూపించే పంట ఆకు యొక్క స్పష్టమైన ఫోటో తీసుకోండి లేదా అప్‌లోడ్ చేయండి. ఏదైనా పరికరంతో పనిచేస్తుంది - ఫోన్, టాబ్లెట్ లేదా కంప్యూటర్."),
    tr!("ai_analysis", "AI Analysis", "AI विश्लेषण", "AI విశ్లేషణ"),
    tr!("ai_analysis_desc", "Our CNN-based deep learning model instantly analyzes the image using advanced pattern recognition and computer vision.", "हमारा CNN-आधारित डीप लर्निंग मॉडल उन्नत पैटर्न पहचान और कंप्यूटर विज़न का उपयोग करके तुरंत छवि का विश्लेषण करता है।", "మా CNN-ఆధారిత డీప్ లెర్నింగ్ మోడల్ అధునాతన నమూనా గుర్తింపు మరియు కంప్యూటర్ విజన్‌ను ఉపయోగించి తక్షణమే చిత్రాన్ని విశ్లేషిస్తుంది."),
    tr!("get_results", "Get Results & Solutions", "परिणाम और समाधान प्राप्त करें", "ఫలితాలు & పరిష్కారాలు పొందండి"),
    tr!("get_results_desc", "Receive disease name, confidence score, detailed symptoms, and proven treatment recommendations for your crops.", "अपनी फसलों के लिए रोग का नाम, विश्वास स्कोर, विस्तृत लक्षण और सिद्ध उपचार सिफारिशें प्राप्त करें।", "మీ పంటల కోసం వ్యాధి పేరు, విశ్వాస స్కోరు, వివరణాత్మక లక్షణాలు మరియు నిరూపితమైన చికిత్స సిఫార్సులు పొందండి."),
    // 行动号召
    tr!("start_today", "Start Detecting Diseases Today", "आज ही रोगों का पता लगाना शुरू करें", "ఈరోజే వ్యాధులను గుర్తించడం ప్రారంభించండి"),
    tr!("join_farmers", "Join farmers, students, and researchers worldwide using AI to protect crops and promote sustainable agriculture", "फसलों की रक्षा करने और टिकाऊ कृषि को बढ़ावा देने के लिए AI का उपयोग करने वाले दुनिया भर के किसानों, छात्रों और शोधकर्ताओं से जुड़ें", "పంటలను రక్షించడానికి మరియు స్థిరమైన వ్యవసాయాన్ని ప్రోత్సహించడానికి AI ఉపయోగిస్తున్న ప్రపంచవ్యాప్తంగా రైతులు, విద్యార్థులు మరియు పరిశోధకులతో చేరండి"),
    tr!("start_free", "Start Free Detection", "मुफ्त डिटेक्शन शुरू करें", "ఉచిత గుర్తింపు ప్రారంభించండి"),
    // 页脚
    tr!("about", "About", "हमारे बारे में", "గురించి"),
    tr!("contact", "Contact", "संपर्क करें", "సంప్రదించండి"),
    tr!("login", "Login", "लॉगिन", "లాగిన్"),
    tr!("privacy", "Privacy", "गोपनीयता", "గోప్యత"),
    // 控制面板
    tr!("welcome", "Welcome to Your Dashboard", "अपने डैशबोर्ड में आपका स्वागत है", "మీ డాష్‌బోర్డ్‌కు స్వాగతం"),
    tr!("welcome_desc", "Upload a clear image of a crop leaf to detect diseases and receive instant treatment recommendations", "रोगों का पता लगाने और तत्काल उपचार सिफारिशें प्राप्त करने के लिए फसल की पत्ती की स्पष्ट छवि अपलोड करें", "వ్యాధులను గుర్తించడానికి మరియు తక్షణ చికిత్స సిఫార్సులు పొందడానికి పంట ఆకు యొక్క స్పష్టమైన చిత్రాన్ని అప్‌లోడ్ చేయండి"),
    tr!("upload_leaf_image", "Upload Leaf Image", "पत्ती की छवि अपलोड करें", "ఆకు చిత్రం అప్‌లోడ్ చేయండి"),
    tr!("take_photo", "Take a well-lit, clear photo of the affected leaf for most accurate results", "सबसे सटीक परिणामों के लिए प्रभावित पत्ती की अच्छी रोशनी वाली, स्पष्ट तस्वीर लें", "అత్యంత ఖచ్చితమైన ఫలితాల కోసం ప్రభావిత ఆకు యొక్క మంచి వెలుతురు, స్పష్టమైన ఫోటో తీసుకోండి"),
    tr!("click_upload", "Click to upload or drag and drop", "अपलोड करने के लिए क्लिक करें या ड्रैग और ड्रॉप करें", "అప్‌లోడ్ చేయడానికి క్లిక్ చేయండి లేదా డ్రాగ్ మరియు డ్రాప్ చేయండి"),
    tr!("analyzing", "AI is analyzing your image...", "AI आपकी छवि का विश्लेषण कर रहा है...", "AI మీ చిత్రాన్ని విశ్లేషిస్తోంది..."),
    tr!("detection_results", "Detection Results", "डिटेक्शन परिणाम", "గుర్తింపు ఫలితాలు"),
    tr!("status", "Status", "स्थिति", "స్థితి"),
    tr!("healthy", "Healthy", "स्वस्थ", "ఆరోగ్యకరమైన"),
    tr!("disease_detected", "Disease Detected", "रोग का पता चला", "వ్యాధి గుర్తించబడింది"),
    tr!("disease_type", "Disease Type", "रोग का प्रकार", "వ్యాధి రకం"),
    tr!("confidence_level", "Confidence Level", "विश्वास स्तर", "విశ్వాస స్థాయి"),
    tr!("recommended_treatment", "Recommended Treatment", "अनुशंसित उपचार", "సిఫార్సు చేయబడిన చికిత్స"),
    tr!("dashboard", "Dashboard", "डैशबोर्ड", "డాష్‌బోర్డ్"),
    tr!("history", "History", "इतिहास", "చరిత్ర"),
    tr!("logout", "Logout", "लॉगआउट", "లాగ్అవుట్"),
    // 品牌与通用
    tr!("app_name", "AICDD"),
    tr!("app_tagline", "AI Crop Disease Detection"),
    tr!("back_home", "Back to Home"),
    tr!("back_dashboard", "Back to Dashboard"),
    tr!("terms", "Terms"),
    tr!("rights_reserved", "All rights reserved."),
    tr!("page_not_found", "Page not found"),
    tr!("loading", "Loading..."),
    // 认证
    tr!("auth_join_title", "Join AICDD"),
    tr!("auth_welcome_back", "Welcome Back"),
    tr!("auth_sign_up_desc", "Create your account to start protecting your crops with AI"),
    tr!("auth_sign_in_desc", "Sign in to continue disease detection"),
    tr!("full_name", "Full Name"),
    tr!("full_name_placeholder", "Enter your full name"),
    tr!("email_address", "Email Address"),
    tr!("password", "Password"),
    tr!("password_placeholder", "Enter your password"),
    tr!("please_wait", "Please wait..."),
    tr!("create_account", "Create Account"),
    tr!("or", "or"),
    tr!("have_account", "Already have an account? Sign in"),
    tr!("no_account", "Don't have an account? Create one"),
    tr!("signed_up", "Account created successfully! You can now sign in."),
    tr!("signed_in", "Signed in successfully!"),
    tr!("auth_failed", "Authentication failed"),
    tr!("logged_out", "Logged out successfully"),
    // 识别
    tr!("detect_instantly", "Detect Plant Diseases Instantly"),
    tr!("upload_formats", "PNG, JPG, JPEG (Maximum 5MB)"),
    tr!("analysis_success", "Image analyzed successfully!"),
    tr!("analysis_failed", "Failed to analyze image"),
    tr!("uploading", "Uploading image..."),
    tr!("saving", "Saving result..."),
    // 历史
    tr!("detection_history", "Detection History"),
    tr!("history_desc", "View all your previous plant disease detections"),
    tr!("no_history", "No detection history yet"),
    tr!("upload_first", "Upload Your First Image"),
    tr!("confidence", "Confidence"),
    tr!("remedy", "Remedy"),
    tr!("delete", "Delete"),
    tr!("history_load_failed", "Failed to load detection history"),
    tr!("detection_deleted", "Detection deleted successfully"),
    tr!("delete_failed", "Failed to delete detection"),
    // 联系
    tr!("get_in_touch", "Get in Touch"),
    tr!("contact_desc", "Have questions or feedback? We'd love to hear from you"),
    tr!("send_us_message", "Send us a Message"),
    tr!("your_name", "Your Name"),
    tr!("email", "Email"),
    tr!("message", "Message"),
    tr!("message_placeholder", "Tell us how we can help..."),
    tr!("send_message", "Send Message"),
    tr!("sending", "Sending..."),
    tr!("contact_thanks", "Thank you for contacting us! We'll get back to you soon."),
    tr!("contact_invalid", "Please fill in your name, a valid email and a message"),
    tr!("contact_info", "Contact Information"),
    tr!("phone", "Phone"),
    tr!("office_hours", "Office Hours"),
    tr!("office_hours_value", "Monday - Friday, 9:00 AM - 6:00 PM"),
    // 关于
    tr!("about_title", "About AICDD"),
    tr!("about_intro", "Empowering farmers with AI-driven plant disease detection"),
    tr!("our_mission", "Our Mission"),
    tr!("mission_text", "We help farmers, students and researchers identify crop diseases early, so treatment starts before the damage spreads."),
    tr!("our_technology", "Our Technology"),
    tr!("deep_learning", "Deep Learning Models"),
    tr!("deep_learning_desc", "Convolutional neural networks trained on thousands of labelled leaf images."),
    tr!("cloud_infra", "Cloud Infrastructure"),
    tr!("cloud_infra_desc", "Images are analysed by a hosted inference service and stored securely per user."),
    tr!("continuous_improvement", "Continuous Improvement"),
    tr!("continuous_improvement_desc", "Models are retrained as new disease samples are collected."),
    tr!("ready_protect", "Ready to protect your crops?"),
    tr!("ready_protect_desc", "Create a free account and run your first detection in under a minute."),
];
