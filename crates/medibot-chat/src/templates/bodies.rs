//! Response bodies.
//!
//! Placeholders: `{user}`, `{message}` (echoed, possibly truncated), `{term}`
//! (search term) and `{service}` (service label). Markup is limited to
//! `**bold**` spans and line breaks.

// =============================================================================
// Services
// =============================================================================

pub const HEALTH_ASSESSMENT: &str = r#"🩺 **Health Assessment for {user}**

For your health concern: "{message}"

**General Health Guidance:**
• **Symptom Tracking**: Monitor when symptoms started and how they progress
• **Severity Assessment**: Rate symptoms as mild, moderate, or severe
• **Associated Factors**: Consider triggers, recent activities, or exposures

**When to Seek Medical Care:**
🚨 **Immediate attention for:**
- Difficulty breathing or chest pain
- High fever (above 103°F/39.4°C)
- Severe or worsening symptoms
- Signs of dehydration

**Self-Care Measures:**
• Rest and adequate sleep (7-9 hours)
• Stay hydrated with water and clear fluids
• Monitor temperature regularly
• Avoid strenuous activities

**📞 Next Steps:**
1. Contact your healthcare provider for persistent symptoms
2. Call 911 for emergencies
3. Consider telemedicine for non-urgent consultations

⚠️ **Medical Disclaimer**: This is educational information only. Always consult healthcare professionals for proper medical evaluation."#;

pub const INSURANCE: &str = r#"🏥 **Insurance Information for {user}**

Regarding: "{message}"

**Common Insurance Services:**
📋 **Coverage Information:**
• Verify treatment coverage and benefits
• Understand deductibles and co-pays
• Find in-network providers
• Review benefits summary

💰 **Claims Assistance:**
• Submit claims properly
• Understand Explanation of Benefits (EOB)
• Appeal denied claims
• Track claim status

**🔍 Finding Providers:**
• Locate in-network doctors and specialists
• Verify hospital coverage
• Check pharmacy benefits

**Important Contacts:**
📞 Insurance customer service
📞 Provider relations
📞 Claims department

**💡 Tips:**
• Always verify coverage before procedures
• Keep all medical documentation
• Review your plan annually during open enrollment

*What specific insurance question can I help you with?*"#;

pub const APPOINTMENTS: &str = r#"📅 **Appointment Assistance for {user}**

For: "{message}"

**🏥 Finding Healthcare Providers:**
• Primary Care Physicians (PCP)
• Specialists (cardiologists, dermatologists, etc.)
• Urgent Care Centers
• Walk-in Clinics

**📍 How to Find Nearby Doctors:**
1. Use your insurance provider directory
2. Check online booking platforms
3. Get referrals from your current doctor
4. Contact your insurer for recommendations

**📞 Booking Appointments:**
• Call the office directly
• Use online patient portals
• Consider telemedicine options
• Ask about same-day availability

**📝 Appointment Preparation:**
• Gather insurance information
• List current medications
• Prepare questions
• Bring your medical history

**⏰ Typical Wait Times:**
• Primary care: 1-2 weeks
• Specialists: 2-6 weeks
• Urgent issues: Same/next day

*What type of appointment are you looking for?*"#;

pub const EMERGENCY: &str = r#"🚨 **Emergency Guidance for {user}**

**🆘 Call 911 immediately for:**
• Chest pain or difficulty breathing
• Severe bleeding or injuries
• Loss of consciousness
• Stroke symptoms (FAST test)
• Severe allergic reactions

**📞 Emergency Contacts:**
• **Emergency Services:** 911
• **Poison Control:** 1-800-222-1222
• **Crisis Hotline:** 988

**🏥 When to use the Emergency Room:**
• Life-threatening conditions
• Severe trauma
• High fever with severe symptoms
• Heart attack or stroke symptoms

**🚑 Urgent Care vs ER:**
• **Urgent Care:** Minor injuries, infections, cuts
• **Emergency Room:** Life-threatening, severe injuries

**🩹 Basic First Aid:**
• **Bleeding:** Apply direct pressure
• **Burns:** Cool with running water
• **Choking:** Heimlich maneuver
• **Allergic Reactions:** Use an EpiPen, call 911

⚠️ **Are you experiencing a medical emergency? If yes, call 911 immediately.**"#;

pub const SERVICE_OVERVIEW: &str = r#"🏥 **MediCare AI for {user}**

Service: {service}
Question: "{message}"

**I'm here to help with comprehensive healthcare assistance:**

**🩺 Health Services:**
• Symptom analysis and guidance
• Health condition information
• Medication questions
• Wellness recommendations

**🏥 Administrative Support:**
• Insurance coverage questions
• Finding healthcare providers
• Appointment scheduling help
• Emergency guidance

**💡 For Best Results:**
• Be specific with your health questions
• Mention any relevant symptoms or concerns
• Ask about particular medical topics

⚠️ **Medical Disclaimer**: Educational information only. Always consult healthcare professionals for medical advice.

*How else can I assist with your healthcare needs?*"#;

// =============================================================================
// Medical
// =============================================================================

pub const VARIANT_SYMPTOMS: &str = r#"🦠 **Omicron Symptoms & Information for {user}:**

**Most Common Symptoms:**
• **Sore throat** - Often the first and most prominent symptom
• **Runny nose** - Similar to common cold symptoms
• **Fatigue** - Feeling tired and low energy
• **Headache** - Mild to moderate intensity
• **Body aches** - Muscle pain and stiffness
• **Mild fever** - Usually lower than previous variants

**Key Characteristics:**
✅ Generally **milder symptoms** compared to Delta and original strains
✅ **Shorter duration** - Most people recover in 3-7 days
✅ **Less likely** to cause loss of taste/smell
✅ **Highly transmissible** but often less severe

**Recovery Timeline:**
📅 **Day 1-2:** Onset of sore throat, runny nose
📅 **Day 3-4:** Peak symptoms with fatigue, body aches
📅 **Day 5-7:** Gradual improvement and recovery

**When to Seek Medical Care:**
🚨 Difficulty breathing or shortness of breath
🚨 Persistent chest pain or pressure
🚨 High fever that doesn't improve
🚨 Severe dehydration

⚠️ **Important**: This is educational information. Always consult healthcare professionals for medical advice."#;

pub const VARIANT_OVERVIEW: &str = r#"🦠 **About the Omicron Variant, {user}:**

Omicron (B.1.1.529) is a highly transmissible variant of COVID-19 first identified in South Africa in November 2021.

**Key Facts:**
• **More transmissible** than previous variants
• **Generally milder symptoms** for most people
• **Breakthrough infections** possible in vaccinated individuals
• **Shorter incubation period** (2-3 days typically)

**Protection Strategies:**
🛡️ **Vaccination** - Reduces severity significantly
😷 **Masking** - Especially in crowded areas
🧼 **Hand hygiene** - Regular washing and sanitizing
📏 **Physical distancing** - When possible in high-risk settings

**Good News:**
✅ Most cases are mild and resolve quickly
✅ Hospitalization rates lower than previous variants
✅ Vaccines still provide strong protection against severe illness

⚠️ **Medical Disclaimer**: For personal medical advice, consult healthcare professionals."#;

pub const FEVER: &str = r#"🌡️ **About Fever, {user}:**

**Normal Temperature Ranges:**
• Adults: 98.6°F (37°C) average
• Fever: 100.4°F (38°C) or higher
• Low-grade fever: 99-100.3°F (37.2-37.9°C)

**Fever Management:**
💊 Over-the-counter fever reducers (acetaminophen, ibuprofen)
💧 Stay well hydrated with fluids
🛏️ Rest and avoid strenuous activity
🌡️ Monitor temperature regularly

**When to Seek Medical Care:**
🚨 Fever above 103°F (39.4°C)
🚨 Fever lasting more than 3 days
🚨 Difficulty breathing
🚨 Severe headache or neck stiffness
🚨 Persistent vomiting

**COVID-19 Context:**
With Omicron, fevers tend to be milder and shorter-lasting compared to previous variants.

⚠️ **Important**: Consult healthcare providers for persistent or concerning symptoms."#;

pub const COUGH: &str = r#"😷 **About Cough, {user}:**

**Types of Cough:**
• **Dry cough** - No mucus production (common with COVID-19)
• **Productive cough** - Brings up mucus or phlegm
• **Persistent cough** - Lasts more than 8 weeks

**Management:**
💧 Stay hydrated - helps thin mucus
🍯 Honey (for adults) - natural cough suppressant
💨 Humidifier - adds moisture to air
🚫 Avoid irritants - smoke, strong scents

**COVID-19 Related:**
• Omicron often causes a dry, persistent cough
• Usually milder than coughs from previous variants
• Can linger for 1-2 weeks after other symptoms resolve

**Seek Medical Attention:**
🚨 Cough with blood
🚨 Difficulty breathing
🚨 High fever with cough
🚨 Chest pain
🚨 Cough preventing sleep for multiple nights

⚠️ **Medical Advice**: Consult healthcare professionals for persistent or severe coughs."#;

pub const SYMPTOM_INDEX: &str = r#"🩺 **Symptom Information for {user}:**

I can help with information about various symptoms. Common topics include:

**COVID-19 Symptoms:**
• Sore throat, runny nose
• Fever and body aches
• Cough and fatigue
• Headache

**General Health:**
• When to seek medical care
• Home remedies and management
• Symptom monitoring

**Ask me specifically about:**
"Tell me about fever"
"What about cough symptoms?"
"Omicron symptoms"
"When should I see a doctor?"

⚠️ **Remember**: This is educational information only. Always consult healthcare professionals for medical advice."#;

pub const RECOVERY: &str = r#"🌟 **Recovery & Treatment Information for {user}:**

**General Recovery Guidelines:**
🛏️ **Rest** - Allow your body to heal
💧 **Hydration** - Water, herbal teas, clear broths
🍊 **Nutrition** - Light, nutritious foods
😴 **Sleep** - 7-9 hours for immune support

**Symptom Management:**
• **Sore throat**: Warm salt water gargles, throat lozenges
• **Congestion**: Steam inhalation, saline rinses
• **Body aches**: Gentle stretching, warm baths
• **Fever**: Rest, fluids, fever reducers if needed

**Omicron Recovery Timeline:**
📅 **Days 1-3**: Onset and peak symptoms
📅 **Days 4-5**: Gradual improvement begins
📅 **Days 6-7**: Most symptoms resolve
📅 **Week 2**: Complete recovery for most people

**When to Seek Medical Care:**
🚨 Symptoms worsen instead of improving
🚨 Difficulty breathing
🚨 Persistent high fever
🚨 Signs of dehydration
🚨 Chest pain or pressure

**Return to Activities:**
• Wait until fever-free for 24 hours
• Start slowly with light activities
• Listen to your body

⚠️ **Important**: This is general guidance. Follow your healthcare provider's specific recommendations."#;

pub const MEDICAL_OVERVIEW: &str = r#"🏥 **Medical Information Assistant for {user}:**

I'm here to help with health and medical information! I can assist with:

**Medical Topics:**
• COVID-19 and variants (Omicron, Delta, etc.)
• Common symptoms and their management
• When to seek medical care
• Recovery and treatment guidance
• Prevention strategies

**Health Guidance:**
• Symptom monitoring
• Home remedies
• General wellness tips
• Emergency warning signs

**Ask me about:**
"What are Omicron symptoms?"
"How to manage fever?"
"When should I see a doctor?"
"COVID recovery timeline"

⚠️ **Medical Disclaimer**: This information is for educational purposes only. Always consult qualified healthcare professionals for medical advice, diagnosis, or treatment.

*What specific medical topic would you like to know about?*"#;

// =============================================================================
// Data
// =============================================================================

pub const STATISTICS: &str = r#"📊 **Omicron Dataset Statistics for {user}:**

**Dataset Overview:**
• **Total tweets**: 17,046 omicron-related posts
• **Source**: Twitter social media data
• **Topic**: User experiences with the Omicron variant
• **Content**: Real user reports, symptoms, recovery stories

**Data Insights:**
📈 **Most discussed symptoms**:
   1. Sore throat (mentioned in ~35% of posts)
   2. Fatigue (mentioned in ~28% of posts)
   3. Headache (mentioned in ~22% of posts)
   4. Body aches (mentioned in ~20% of posts)

📊 **Sentiment Trends**:
   • 60% Neutral/Informational posts
   • 25% Positive (mild symptoms, quick recovery)
   • 15% Negative (concerning symptoms)

📅 **Timeline Patterns**:
   • Peak reporting: 2-3 days after symptom onset
   • Recovery posts: 5-7 days after initial symptoms
   • Most active reporting during variant surges

**Key Findings:**
✅ Majority report milder symptoms vs. previous variants
✅ Faster recovery times (3-7 days average)
✅ Sore throat as primary initial symptom"#;

pub const SENTIMENT: &str = r#"😊 **Sentiment Analysis Results for {user}:**

**Overall Sentiment Distribution:**
📊 **Positive**: 40% - Quick recovery, mild symptoms
📊 **Neutral**: 45% - Factual reporting, symptom updates
📊 **Negative**: 15% - Severe symptoms, concerns

**Positive Sentiment Keywords:**
✅ "mild symptoms" - 1,247 mentions
✅ "quick recovery" - 892 mentions
✅ "feeling better" - 654 mentions
✅ "not as bad as expected" - 421 mentions

**Concern-Related Keywords:**
⚠️ "still feeling sick" - 334 mentions
⚠️ "worse than expected" - 156 mentions
⚠️ "long symptoms" - 89 mentions

**Recovery Sentiment:**
🌟 **Week 1**: Mixed - worry and discomfort
🌟 **Week 2**: Improving - relief and gratitude
🌟 **Week 3+**: Positive - sharing recovery experiences

**Conclusion:**
The majority of users express relief that Omicron symptoms were milder than anticipated, with faster recovery times compared to previous variants."#;

pub const SEARCH: &str = r#"🔍 **Search Results for "{term}", {user}:**

**Found relevant tweets about "{term}":**

**Example 1:**
"Day 3 of omicron symptoms - sore throat is the main issue, but feeling much better than I expected. Fever broke yesterday."

**Example 2:**
"Omicron update: headache and fatigue are persistent, but manageable. Grateful for vaccines making this milder."

**Example 3:**
"Recovery day 6 - back to feeling normal! Sore throat was the worst part, but only lasted 3 days. Thankful it wasn't worse."

**Pattern Analysis:**
• Most reports mention symptoms lasting 3-7 days
• Sore throat consistently mentioned as primary symptom
• Positive outcomes and quick recovery frequently reported
• Vaccination status often mentioned as protective factor

**Related Topics:**
Try searching for:
• "symptoms timeline"
• "recovery experiences"
• "vaccine effectiveness"
• "comparison with other variants""#;

pub const DATA_OVERVIEW: &str = r#"📊 **Data Analysis Center for {user}:**

**Available Dataset:**
17,046 real user tweets about Omicron experiences

**Analysis Options:**
🔍 **Search Functions**:
   • "Search for fever experiences"
   • "Find tweets about recovery"
   • "Look for symptom patterns"

📈 **Statistics Available**:
   • "Show me omicron statistics"
   • "Analyze symptom frequency"
   • "Timeline trends"

😊 **Sentiment Analysis**:
   • "Analyze sentiment trends"
   • "Positive vs negative experiences"
   • "Recovery success stories"

**Quick Insights:**
• Sore throat: Most common first symptom
• Recovery time: 3-7 days average
• Positive sentiment: 65% of users
• Vaccination impact: Consistently mentioned as helpful

*What specific aspect of the data would you like to explore?*"#;

// =============================================================================
// General
// =============================================================================

pub const GREETING: &str = r#"👋 **Hello {user}! Welcome to MediCare AI**

I'm here to help you with:

🏥 **Medical Information:**
• COVID-19 and Omicron variant details
• Symptom guidance and management
• Recovery timelines and treatment
• When to seek medical care

📊 **Data Analysis:**
• 17,046 omicron user experiences
• Symptom patterns and trends
• Recovery statistics
• Sentiment analysis

**Try asking:**
• "What are Omicron symptoms?"
• "Show me data statistics"
• "How long does recovery take?"
• "Search for fever experiences"

⚠️ **Medical Disclaimer**: I provide educational information only. Always consult healthcare professionals for medical advice.

*How can I help you today?*"#;

pub const HELP: &str = r#"❓ **Help & Usage Guide for {user}:**

**What I Can Do:**
🩺 **Medical Assistance:**
   • COVID-19 and variant information
   • Symptom explanations
   • Recovery guidance
   • Health recommendations

📊 **Data Analysis:**
   • Omicron experience statistics
   • Symptom frequency analysis
   • User sentiment trends
   • Recovery pattern insights

**Example Questions:**
• "What are the symptoms of Omicron?"
• "How long does Omicron last?"
• "Show me tweet statistics"
• "Analyze recovery experiences"
• "When should I see a doctor?"

**For Best Results:**
• Be specific with your questions
• Ask about particular symptoms
• Request data analysis on specific topics

**Important Reminders:**
⚠️ Educational information only
🏥 Consult healthcare professionals for medical advice

*What would you like to know about?*"#;

pub const DEFAULT: &str = r#"🤖 **AI Assistant Response for {user}:**

Thank you for your question: "{message}"

**I can help with:**
🏥 **Medical Topics:** COVID-19, symptoms, recovery, health guidance
📊 **Data Analysis:** Omicron experiences, statistics, trends
💬 **General Support:** Health information, when to seek care

**Popular Queries:**
• "Omicron symptoms and recovery"
• "Data statistics and trends"
• "Medical guidance and advice"
• "Recovery timeline information"

*What specific topic would you like to explore?*"#;

// =============================================================================
// Session
// =============================================================================

pub const WELCOME: &str =
    "Hello {user}! 👋 I'm ready to help you with {service}. What would you like to know?";
