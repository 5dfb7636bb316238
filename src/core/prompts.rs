//! Prompt construction for every gateway operation.
//!
//! The prompt text is treated as opaque provider input: it is carried over
//! from the product's content team verbatim (Arabic), and only the user's
//! structured fields are substituted in. Keep wording changes out of code
//! reviews; they are content edits, not logic edits.

use crate::models::{
    BusinessInfo, ContentPlanInfo, IdeaGenerationInfo, MarketingIdea, ScriptGenerationInfo,
    ScriptType,
};
use crate::models::business::BudgetChoice;

/// Shared neuromarketing guide referenced by idea, plan, and script prompts.
pub const MARKETING_GUIDE: &str = r#"
### دليل المحتوى المتقدم للانتشار الفيروسي (Neuromarketing)

هذا الدليل يدمج بين علم النفس، التسويق العصبي، والتقنيات السينمائية البسيطة لخلق محتوى لا يُنسى لمتاجر الملابس الصغيرة. جميع الأفكار مصممة للتنفيذ باستخدام هاتف ذكي.

**المحور الاستراتيجي: صدمة الوعي والغموض السمعي البصري**
الهدف هو إثارة: الدهشة (Surprise)، الفضول (Curiosity)، والنفور من الخسارة (Loss Aversion).

---

**الجزء الأول: أفكار المحتوى الفيروسي (خطة لـ 4 أسابيع)**

**1. الأسبوع الأول: صدمة "كشف المستور" (The Disclosure Shock)**
*   **فكرة "الصوت الخفي":** اكشف كيف تستخدم بعض المتاجر ترددات صوتية خفية (Subliminal Frequencies) لإثارة شعور بالإلحاح والندرة لدى العملاء.
    *   *التقنية السينمائية:* استخدم مؤثرات صوتية مقلقة (نبضات قلب، ساعة تدق) ثم اكشف عن "السر" العلمي. اختتم بسؤال تفاعلي: "هل تريد معرفة التردد؟ اكتب 'نغمة' في التعليقات."
*   **فكرة "ChatGPT يقرأ مشاعرك":** ادّعِ أن الذكاء الاصطناعي لا يكتب المحتوى عشوائياً، بل يختار كل كلمة بناءً على تحليل بيانات مسح حركة العين (Eye-Tracking) لملايين البشر لـ"برمجة" دماغ المشتري.
    *   *التقنية السينمائية:* استخدم فلاتر بصرية تحاكي شاشة تنظر إليك، مع خطوط حمراء تتبع حركة العين. اختتم بتشويقة: "الآن، كيف تستخدم هذه القوة لصالحك؟"

**2. الأسبوع الثاني: القصة الساخرة واللامنطقية (The Absurd Reality)**
*   **فكرة "التناقض الساخر":** فيديو ساخر بأسلوب فخم يكشف أن "أجواء العلامة التجارية" (The Brand Vibe)، مثل الإضاءة، قد تكون أهم من المنتج نفسه في خلق ارتباط عاطفي.
    *   *التقنية السينمائية:* حاكِ إعلاناً فاخراً (مثل Jacquemus)، ثم اكشف الكواليس البسيطة (شخص يمسك مستشعر دماغ EEG على رأس الموديل). اختتم بعرض خدمة: "هل تريد أن أصمم لك إضاءة دماغية لبراندك؟"
*   **فكرة "المنطق المقلوب":** اعرض لافتة إعلانية بها خطأ لغوي أو منطقي مقصود. اشرح كيف أن هذا "الخطأ البسيط" يوقف الدماغ عن التمرير السريع ويجعل المعلومة اللاواعية تتسرب أسرع.
    *   *التقنية السينمائية:* استخدم خطوطاً وتصاميم قديمة (مثل إعلانات الثمانينات). ابدأ بإيقاع سريع ثم أبطئ عند اللافتة. اختتم بتأكيد: "نحن ننشئ هذه الأخطاء عمداً! علم الأعصاب يثبت ذلك."

**3. الأسبوع الثالث: اختبار العميل (The User Challenge)**
*   **فكرة "تحدي إعلان AI":** تحدى الجمهور مباشرة. اعرض 3 إعلانات (واحد فاشل، واحد تقليدي، وواحد مصمم بتقنيات عصبية). اطلب منهم تخمين أي واحد سيحقق أعلى مبيعات.
    *   *التقنية السينمائية:* مونتاج سريع وعلامات استفهام متحركة. يكون الكشف عن الإعلان الفائز بطيئاً ومصحوباً بشرح صوتي عميق يكشف السر (مثال: "الإعلان الفائز استخدم قانون الألوان الذي يوجه العين مباشرة لزر الشراء!").
*   **فكرة "هكر الدماغ":** فيديو يحاكي شخصاً "يهكر" متجراً إلكترونياً، لكنه يكتشف أن الكلمات المفتاحية المعروضة (مثل "حصرياً"، "الوقت محدود") هي بحد ذاتها "شفرة" برمجية تفك شيفرة الشراء في دماغ العميل.
    *   *التقنية السينمائية:* استخدم مؤثرات بصرية رقمية بأسلوب فيلم Matrix، مع تسليط الضوء على الكلمات المفتاحية باللون الأحمر. اختتم برسالة قوية: "هذه الكلمات ليست مجرد ترويج، بل هي أوامر برمجية لدماغك."

**4. الأسبوع الرابع: الكشف عن الأداة (The Solution Reveal)**
*   **فكرة "التحول الكبير":** اروِ قصة تحولك (أنت كخبير) من باحث قلق في عالم التسويق إلى مسوق لا يُهزم، وكل ذلك بفضل اكتشاف أو إنشاء أداة AI ثورية.
    *   *التقنية السينمائية:* إضاءة درامية، لقطات سريعة ومربكة في البداية، ثم هدوء وسكينة عند استعراض واجهة الأداة. اشرح المنطق العصبي الذي تستخدمه الأداة.
*   **فكرة "التحدي النهائي":** قم بمحاكاة اختبار (حقيقي أو وهمي) تتنافس فيه أداتك الـ AI مع وكالات تسويق كبرى على نفس الميزانية. اعرض النتائج التي تظهر تفوق أداتك في معدلات النقر (CTR) والتحويل (Conversion).
    *   *التقنية السينمائية:* استخدم رسوم بيانية متحركة (Animated Charts) جذابة لإثبات التفوق بشكل مرئي. اختتم بدعوة صريحة وواثقة لتجربة الأداة.

---

**الجزء الثاني: إرشادات التنفيذ الفيروسي**

*   **الإيقاع السريع (Fast Cut):** يجب ألا يتجاوز الفيديو 45 ثانية.
*   **النصوص الواضحة:** معظم المستخدمين يشاهدون بدون صوت. يجب أن يكون النص على الشاشة كبيراً وواضحاً وجذاباً.
*   **الخطاف (Hook) في أول 3 ثوانٍ:** ابدأ بسؤال صادم، أو معلومة غريبة، أو مشهد غير متوقع لجذب الانتباه فوراً وتجاوز "حاجز التمرير السريع".
*   **الجودة على البساطة:** لا تحتاج لمعدات احترافية، لكن اهتم بجودة الصوت (إذا كان هناك تعليق صوتي) ووضوح الصورة. الإضاءة الطبيعية هي صديقك الأول.
*   **الحلقة المفتوحة (Open Loop):** اختتم دائماً الفيديو بسؤال أو طلب يدفع المشاهد للتفاعل (تعليق، مشاركة) ويفتح حلقة من الفضول للمحتوى القادم.
"#;

/// Budget wording for the idea prompt: amount given, budget without amount,
/// or no budget at all.
fn budget_part(info: &IdeaGenerationInfo) -> String {
    match info.has_budget {
        BudgetChoice::Yes => match info.budget_amount.as_deref().map(str::trim) {
            Some(amount) if !amount.is_empty() => format!(
                "\n- الميزانية المتاحة: {amount}. يجب أن تكون الأفكار مناسبة لهذه الميزانية."
            ),
            _ => "\n- لديه ميزانية متاحة لكن لم يحدد المبلغ. اقترح أفكارًا قد تتطلب بعض الإنفاق وأفكارًا أخرى مجانية.".to_string(),
        },
        BudgetChoice::No => {
            "\n- لا توجد ميزانية متاحة. يجب أن تكون جميع الأفكار مجانية أو منخفضة التكلفة للغاية.".to_string()
        }
    }
}

fn additional_info_part(info: &IdeaGenerationInfo) -> String {
    match info.additional_info.as_deref().map(str::trim) {
        Some(extra) if !extra.is_empty() => {
            format!("\n- معلومات إضافية من المستخدم يجب التركيز عليها: \"{extra}\"")
        }
        _ => String::new(),
    }
}

/// Prompt for the six-idea batch.
pub fn ideas(business: &BusinessInfo, info: &IdeaGenerationInfo) -> String {
    format!(
        r#"
أنت خبير استراتيجي في التسويق الفيروسي وصناعة المحتوى، متخصص في الأزياء للشركات الصغيرة. لديك فهم عميق لتقنيات التسويق العصبي (Neuromarketing) وعلم النفس. مهمتك هي تحويل الأفكار العادية إلى محتوى مثير للجدل يحقق انتشاراً واسعاً، مع الحفاظ على بساطة التنفيذ باستخدام هاتف ذكي فقط. يجب أن تكون ردودك باللغة العربية.

استخدم المرجع التالي لتكون إجاباتك دقيقة، احترافية، ومثيرة للجدل:

**المرجع الأساسي: دليل المحتوى المتقدم للانتشار الفيروسي (Neuromarketing)**
{guide}

---

الآن، بناءً على هذا المرجع، قم بتحليل المعلومات التالية لمتجر ملابس:

**معلومات المتجر:**
- اسم المتجر: {name}
- الجمهور المستهدف: {audience}
- مرحلة العمل: {stage}
- وصف عام للمنتجات: {products}

**معلومات لتوليد الأفكار:**
- تفاصيل المنتج المراد التسويق له: {product_details}
- الحدث أو المناسبة: {event}
- **نوع التسويق المطلوب: {marketing_type}**
{budget}
{additional}

**المهمة:**
بناءً على كل ما سبق، وخاصةً **نوع التسويق المطلوب** و**المرجع الأساسي**، قم بإنشاء 6 أفكار تسويقية إبداعية ومتنوعة ومناسبة للمعلومات المقدمة.
يجب أن تكون كل فكرة بمثابة مفهوم متكامل لفيديو قصير (Reel أو TikTok).
لكل فكرة من الأفكار الست، قدم التفاصيل التالية:
- **title:** عنوان جذاب ومختصر للفكرة.
- **concept:** شرح للفكرة الأساسية وما يدور حوله الفيديو.
- **hook:** وصف لأول 3 ثواني من الفيديو لجذب انتباه المشاهد فورًا.
- **visuals:** وصف تفصيلي للمشاهد المقترحة، اللقطات، وزوايا الكاميرا.
- **cta:** دعوة واضحة لاتخاذ إجراء في نهاية الفيديو (مثل "تسوقي الآن" أو "شاركينا رأيك").
"#,
        guide = MARKETING_GUIDE,
        name = business.name,
        audience = business.audience,
        stage = business.stage,
        products = business.products,
        product_details = info.product_details,
        event = info.event,
        marketing_type = info.marketing_type,
        budget = budget_part(info),
        additional = additional_info_part(info),
    )
}

/// Prompt for elaborating a user-edited idea into a polished replacement.
pub fn regenerate_idea(idea: &MarketingIdea, business: &BusinessInfo) -> String {
    format!(
        r#"
أنت مخرج إبداعي ومتخصص في تسويق الأزياء الفيروسي. مهمتك هي أخذ فكرة مبدئية معدلة من قبل المستخدم وتحويلها إلى مفهوم فيديو متكامل ومصقول، مع الأخذ بعين الاعتبار مبادئ التسويق العصبي لجعلها أكثر تأثيراً.

معلومات المتجر:
- اسم المتجر: {name}
- الجمهور المستهدف: {audience}

الفكرة المعدلة من قبل المستخدم (يجب أن تبني عليها وتحسنها):
- العنوان: {title}
- المفهوم: {concept}
- الخطاف: {hook}
- التصور البصري: {visuals}
- دعوة للعمل: {cta}

المهمة:
قم بتحسين وتوسيع هذه الفكرة. حافظ على جوهر تعديلات المستخدم، ولكن أضف المزيد من التفاصيل الإبداعية، واقترح لقطات أكثر تحديدًا، واجعل الدعوة للعمل أكثر إقناعًا. يجب أن يكون الناتج النهائي فكرة فيديو احترافية جاهزة للتنفيذ.
"#,
        name = business.name,
        audience = business.audience,
        title = idea.title,
        concept = idea.concept,
        hook = idea.hook,
        visuals = idea.visuals,
        cta = idea.cta,
    )
}

/// Prompt for applying a free-text edit instruction to one idea.
pub fn idea_with_instruction(
    idea: &MarketingIdea,
    instruction: &str,
    business: &BusinessInfo,
) -> String {
    format!(
        r#"
أنت مخرج إبداعي ومتخصص في تسويق الأزياء الفيروسي. مهمتك هي تحسين فكرة فيديو بناءً على ملاحظات المستخدم، مع تطبيق مبادئ التسويق العصبي.

معلومات المتجر:
- اسم المتجر: {name}
- الجمهور المستهدف: {audience}

الفكرة الأصلية هي:
- العنوان: {title}
- المفهوم: {concept}
- الخطاف: {hook}
- التصور البصري: {visuals}
- دعوة للعمل: {cta}

تعليمات المستخدم للتعديل:
"{instruction}"

المهمة:
أعد كتابة الفكرة بناءً على تعليمات المستخدم. حافظ على جوهر الفكرة الأصلية ولكن طبق التعديلات المطلوبة بدقة. اجعل الناتج النهائي فكرة فيديو احترافية محسّنة وجاهزة للتنفيذ.
"#,
        name = business.name,
        audience = business.audience,
        title = idea.title,
        concept = idea.concept,
        hook = idea.hook,
        visuals = idea.visuals,
        cta = idea.cta,
        instruction = instruction,
    )
}

fn content_plan_inputs(info: &ContentPlanInfo) -> String {
    format!(
        r#"**معلومات المتجر المفصلة (المدخلات):**

**1. هوية العلامة التجارية:**
- اسم المتجر: {store_name}
- نوع الملابس الأساسي (Niche): {niche}
- ما يميز المتجر (Core Value): {core_value}
- نبرة الصوت مع الجمهور (Tone of Voice): {tone}

**2. الجمهور والأهداف:**
- العميل المثالي: {target_audience}
- المنتجات التي سيتم التركيز عليها: {focus_products}
- الهدف الرئيسي للشهر: {goal}
- العروض المخطط لها: {promotions}

**3. الجانب البصري والإلهام:**
- الأسلوب البصري المفضل للفيديوهات: {visual_style}
- الهاشتاغات المستخدمة: {hashtags}
- مصادر الإلهام: {inspiration}"#,
        store_name = info.store_name,
        niche = info.niche,
        core_value = info.core_value,
        tone = info.tone_of_voice,
        target_audience = info.target_audience,
        focus_products = info.focus_products,
        goal = info.monthly_goal.prompt_text(),
        promotions = info.promotions,
        visual_style = info.visual_style,
        hashtags = info.hashtags,
        inspiration = info.inspiration,
    )
}

/// Prompt for the full content strategy.
pub fn strategy(info: &ContentPlanInfo) -> String {
    format!(
        r#"
أنت مرشد وخبير استراتيجي ودود وعملي لأصحاب المتاجر الصغيرة في مجال الأزياء. مهمتك هي تحليل المعلومات التفصيلية المقدمة وتحويلها إلى استراتيجية محتوى متكاملة، بسيطة، وقابلة للتنفيذ باستخدام هاتف ذكي. يجب أن تكون ردودك باللغة العربية ومشجعة وسهلة الفهم.

---

{inputs}

---

**المهمة:**
بناءً على هذه المعلومات الغنية، قم بإنشاء استراتيجية محتوى مخصصة. يجب أن تكون كل نقطة مباشرة، عملية، ومبنية على المدخلات. قم بتغطية النقاط التالية:

1.  **الرؤية (Vision):** جملة واحدة ملهمة تلخص حلم المتجر بناءً على قيمته الأساسية.
2.  **الأهداف (Objectives):** قائمة من 2-3 أهداف واضحة ومحددة، مع الأخذ بعين الاعتبار الهدف الشهري المحدد.
3.  **الجمهور المستهدف (Target Audience):** فقرة قصيرة ومفصلة تصف العميل المثالي بدقة بناءً على المدخلات.
4.  **الرسائل الأساسية (Core Messages):** قائمة من 3 رسائل قصيرة وقوية تعكس قيمة المتجر وتخاطب الجمهور بنبرة الصوت المحددة.
5.  **قنوات التواصل (Channels):** اقترح 1-2 من أهم المنصات (مثل Instagram, TikTok) مع تبرير بسيط ومقنع يعتمد على الجمهور والأسلوب البصري.
6.  **الأسلوب (Style):**
    - **الأسلوب الصوتي (Tone):** قم بتأكيد وتوسيع وصف نبرة الصوت المحددة.
    - **الأسلوب البصري (Visual):** قدم نصائح عملية ومحددة لتطبيق الأسلوب البصري المطلوب باستخدام الهاتف (مثال: "لتحقيق الإضاءة الطبيعية، صوري دائمًا قرب نافذة كبيرة خلال النهار.").
7.  **ملخص خطة المحتوى (Content Plan Overview):** صف 3 "أعمدة محتوى" رئيسية ومبتكرة تتناسب مع المنتجات والجمهور (مثال: "قصص ما وراء القطعة"، "تحدي التنسيق الأسبوعي"، "كيف تحل [اسم القطعة] مشكلة [مشكلة العميل]").
8.  **مقاييس النجاح (Metrics):** قائمة بمؤشرات نجاح بسيطة تتوافق مباشرة مع الهدف الشهري (مثال: إذا كان الهدف هو الوعي، تتبع "عدد مرات الظهور" و"نمو المتابعين").
"#,
        inputs = content_plan_inputs(info),
    )
}

/// Prompt for the four-week monthly plan.
pub fn monthly_plan(info: &ContentPlanInfo) -> String {
    format!(
        r#"
أنت مرشد ودود وخبير في التسويق الفيروسي لمتاجر الأزياء الصغيرة. مهمتك هي تحويل المعلومات التفصيلية عن المتجر إلى خطة محتوى شهرية (4 أسابيع) جريئة وعملية، يمكن تصويرها بالكامل باستخدام هاتف ذكي.

استخدم الدليل المتقدم التالي كمصدر إلهام أساسي لجميع اقتراحاتك:
{guide}

---

{inputs}

---

**المهمة:**
بناءً على المعلومات أعلاه، قم بإنشاء خطة محتوى شهرية.
لكل أسبوع، قدم 3 أفكار محتوى مختلفة ومبتكرة لفيديوهات قصيرة (Reels/TikTok) مستوحاة من **الدليل المتقدم** ولكن مخصصة **لهوية المتجر وأهدافه**.
**صف كل فكرة بوضوح واشرح ببساطة كيف يمكن لصاحب المتجر تصويرها بنفسه باستخدام الهاتف.**

مثال لفكرة جيدة مخصصة:
"**فكرة: 'سر الراحة في يوم حافل' (مستوحاة من كشف المستور).**
 **كيفية التصوير:** ابدئي بلقطات سريعة ومُجهِدة ليوم عمل طويل (تكبير على شاشة اللابتوب، صوت نقرات كيبورد سريعة). ثم، انتقال هادئ لك وأنتِ ترتدين [اسم المنتج] وتجلسين باسترخاء. أضيفي موسيقى هادئة ونصاً يقول: 'السر ليس في انتهاء الدوام، بل في ما ترتدينه بعده. [اسم المنتج] مصمم ليمنحك شعور الراحة الذي تستحقينه'."

الآن، أنشئ الخطة الكاملة لـ 4 أسابيع.
"#,
        guide = MARKETING_GUIDE,
        inputs = content_plan_inputs(info),
    )
}

/// The hard content constraint matching the selected script type.
pub fn script_type_instruction(script_type: ScriptType) -> &'static str {
    match script_type {
        ScriptType::Visual => "السكربت يجب أن يكون مرئيًا بالكامل. ركز فقط على وصف المشاهد، الحركة، زوايا الكاميرا، والتعبيرات. **لا يجب أن يحتوي السكربت على أي حوار أو تعليق صوتي على الإطلاق.**",
        ScriptType::Text => "السكربت يجب أن يكون نصيًا بالكامل. ركز فقط على كتابة الحوار أو التعليق الصوتي. **لا تصف أي مشاهد بصرية أو حركات.**",
        ScriptType::Both => "السكربت يجب أن يكون متوازنًا بين العناصر المرئية والنصية. قدم وصفًا للمشاهد والحركة، بالإضافة إلى أي حوار أو تعليق صوتي ضروري.",
    }
}

/// Prompt for the detailed (story questionnaire) script mode.
pub fn script(
    script_info: &ScriptGenerationInfo,
    business: &BusinessInfo,
    script_type: ScriptType,
) -> String {
    format!(
        r#"
أنت كاتب سيناريو محترف ومخرج مبدع، متخصص في إنشاء محتوى فيديو قصير يحقق انتشاراً فيروسياً (Reels, TikTok) في مجال الأزياء. لديك فهم عميق للتسويق العصبي (Neuromarketing) وتعرف كيف تترجم الأفكار إلى قصص مرئية مؤثرة باستخدام أدوات بسيطة مثل الهاتف الذكي. يجب أن تكون ردودك باللغة العربية.

استخدم الدليل التالي كمصدر إلهام لأسلوبك السينمائي:
{guide}

---

**المهمة:**
اكتب سيناريو (سكربت) مفصل بناءً على المعلومات القصصية التالية. يجب أن يكون السكربت منظمًا، سهل الفهم، وعمليًا للتصوير بهاتف ذكي.

**معلومات القصة:**

**1. لنتعرف على منتجك:**
- المنتج المحدد: {product_defined}
- الشعور الذي يمنحه: {emotional_story}
- ملمس المنتج: {touch_details}
- شكل المنتج وتفاصيله: {sight_details}

**2. من هو عميلك:**
- العميل المثالي ونمط حياته: {lifestyle}
- المشكلة التي يحلها المنتج: {problem}

**3. الهدف من السكربت:**
- الهدف من الفيديو: {video_goal}
- النداء النهائي للإجراء (CTA): "{cta}"

**معلومات العلامة التجارية (لضبط النبرة):**
- اسم المتجر: {name}
- الجمهور المستهدف العام: {audience}

**نوع السكربت المطلوب: {type_instruction}**

**تعليمات كتابة السكربت:**
1.  **ابنِ قصة:** لا تعرض المنتج فقط، بل اجعله الحل لمشكلة العميل. ابدأ بإظهار "المشكلة" أو "التحدي" الذي يواجهه العميل في حياته اليومية.
2.  **أظهر التحول:** بيّن كيف أن ارتداء المنتج يغير شعور العميل أو يحل مشكلته، مما ينقله من حالة إلى حالة أفضل.
3.  **ركز على الحواس:** استخدم التفاصيل الحسية والمرئية التي أعطيت لك لوصف اللقطات بشكل سينمائي. صف ملمس القماش، حركة القطعة، تفاصيل اللون.
4.  **الهيكل:** نظم السكربت في مشاهد (Scene)، مع وصف للحركة (Action)، الحوار/التعليق الصوتي (Dialogue/Voiceover)، واقتراحات للصوت (Sound).
5.  **المدة:** اجعل السكربت مناسبًا لمدة فيديو لا تتجاوز 30-45 ثانية.
6.  **الختام:** يجب أن ينتهي السكربت بالنداء للإجراء (CTA) المحدد.
"#,
        guide = MARKETING_GUIDE,
        product_defined = script_info.product_defined,
        emotional_story = script_info.emotional_story,
        touch_details = script_info.touch_details,
        sight_details = script_info.sight_details,
        lifestyle = script_info.ideal_customer_lifestyle,
        problem = script_info.problem_to_solve,
        video_goal = script_info.video_goal,
        cta = script_info.cta_text,
        name = business.name,
        audience = business.audience,
        type_instruction = script_type_instruction(script_type),
    )
}

/// Prompt for the quick mode: derive a script from freeform pasted idea text.
pub fn script_from_idea(idea: &str, business: &BusinessInfo, script_type: ScriptType) -> String {
    format!(
        r#"
أنت كاتب سيناريو محترف ومخرج مبدع، متخصص في تحويل الأفكار التسويقية إلى محتوى فيديو قصير يحقق انتشاراً فيروسياً (Reels, TikTok) في مجال الأزياء.
مهمتك هي أخذ فكرة تسويقية جاهزة وتحويلها إلى سيناريو (سكربت) مفصل وجاهز للتصوير باستخدام هاتف ذكي.

استخدم الدليل التالي كمصدر إلهام لأسلوبك السينمائي:
{guide}

---

**المهمة:**
اكتب سيناريو (سكربت) مفصل بناءً على الفكرة التسويقية التالية. يجب أن يكون السكربت منظمًا، سهل الفهم، وعمليًا للتصوير بهاتف ذكي.

**الفكرة التسويقية (المدخلات):**
---
{idea}
---

**معلومات العلامة التجارية (لضبط النبرة):**
- اسم المتجر: {name}
- الجمهور المستهدف العام: {audience}

**نوع السكربت المطلوب: {type_instruction}**

**تعليمات كتابة السكربت:**
1.  **حلل الفكرة:** استخرج المفهوم الأساسي، الخطاف (Hook)، التصور البصري، ودعوة العمل (CTA) من الفكرة المقدمة.
2.  **ابنِ قصة مرئية:** حوّل المفهوم إلى قصة قصيرة. لا تكتفِ بسرد الفكرة، بل أظهرها من خلال مشاهد متسلسلة.
3.  **ابدأ بالخطاف:** تأكد من أن أول 3 ثوانٍ من السكربت تعكس "الخطاف" المذكور في الفكرة لجذب الانتباه فوراً.
4.  **فصّل المشاهد:** ترجم "التصور البصري" إلى مشاهد محددة (Scenes)، مع وصف للحركة (Action)، والحوار/التعليق الصوتي (Dialogue/Voiceover)، واقتراحات للصوت (Sound).
5.  **المدة:** اجعل السكربت مناسبًا لمدة فيديو لا تتجاوز 30-45 ثانية.
6.  **الختام:** يجب أن ينتهي السكربت بدعوة واضحة للعمل (CTA) مستوحاة من الفكرة الأصلية.
"#,
        guide = MARKETING_GUIDE,
        idea = idea,
        name = business.name,
        audience = business.audience,
        type_instruction = script_type_instruction(script_type),
    )
}

/// Prompt for rewriting an existing detailed-mode script under an edit
/// instruction while preserving its scene/dialogue/sound structure.
pub fn script_with_instruction(
    original_script: &str,
    instruction: &str,
    business: &BusinessInfo,
    script_info: &ScriptGenerationInfo,
) -> String {
    format!(
        r#"
أنت كاتب سيناريو محترف ومخرج مبدع، متخصص في تحسين وتعديل نصوص الفيديو القصير لوسائل التواصل الاجتماعي في مجال الأزياء.
مهمتك هي أخذ سكربت موجود وتعليمات تعديل من المستخدم، ثم إعادة كتابة السكربت ببراعة لتلبية طلبات المستخدم.

استخدم الدليل التالي كمصدر إلهام لأسلوبك السينمائي عند التعديل لتعزيز التأثير الفيروسي:
{guide}
---

**معلومات القصة الأصلية (للسياق):**
- المنتج: {product_defined}
- الشعور الذي يمنحه: {emotional_story}
- المشكلة التي يحلها: {problem}
- العميل المثالي: {lifestyle}
- الهدف من الفيديو: {video_goal}
- النداء للإجراء: "{cta}"

**معلومات العلامة التجارية الأساسية:**
- اسم المتجر: {name}
- الجمهور المستهدف العام: {audience}

**السكربت الأصلي:**
---
{original}
---

**تعليمات التعديل من المستخدم:**
"{instruction}"

**المهمة:**
أعد كتابة السكربت الأصلي بالكامل مع تطبيق التعديلات المطلوبة في تعليمات المستخدم بدقة. حافظ على هيكل السكربت (مشهد، حركة، حوار، صوت) ولكن قم بتعديل المحتوى بناءً على التعليمات والسياق القصصي الأصلي. يجب أن يكون السكربت الجديد متماسكًا، إبداعيًا، وجاهزًا للتنفيذ.
"#,
        guide = MARKETING_GUIDE,
        product_defined = script_info.product_defined,
        emotional_story = script_info.emotional_story,
        problem = script_info.problem_to_solve,
        lifestyle = script_info.ideal_customer_lifestyle,
        video_goal = script_info.video_goal,
        cta = script_info.cta_text,
        name = business.name,
        audience = business.audience,
        original = original_script,
        instruction = instruction,
    )
}

/// Prompt for rewriting a quick-mode script under an edit instruction, keeping
/// the original idea as context.
pub fn script_from_idea_with_instruction(
    original_script: &str,
    instruction: &str,
    business: &BusinessInfo,
    original_idea: &str,
) -> String {
    format!(
        r#"
أنت كاتب سيناريو محترف ومخرج مبدع، متخصص في تحسين وتعديل نصوص الفيديو القصير لوسائل التواصل الاجتماعي في مجال الأزياء.
مهمتك هي أخذ سكربت موجود وتعليمات تعديل من المستخدم، ثم إعادة كتابة السكربت ببراعة لتلبية طلبات المستخدم.

استخدم الدليل التالي كمصدر إلهام لأسلوبك السينمائي عند التعديل لتعزيز التأثير الفيروسي:
{guide}
---

**الفكرة التسويقية الأصلية (للسياق):**
---
{idea}
---

**معلومات العلامة التجارية الأساسية:**
- اسم المتجر: {name}
- الجمهور المستهدف العام: {audience}

**السكربت الأصلي:**
---
{original}
---

**تعليمات التعديل من المستخدم:**
"{instruction}"

**المهمة:**
أعد كتابة السكربت الأصلي بالكامل مع تطبيق التعديلات المطلوبة في تعليمات المستخدم بدقة. حافظ على هيكل السكربت (مشهد، حركة، حوار، صوت) ولكن قم بتعديل المحتوى بناءً على التعليمات والسياق القصصي المستوحى من **الفكرة التسويقية الأصلية**. يجب أن يكون السكربت الجديد متماسكًا، إبداعيًا، وجاهزًا للتنفيذ.
"#,
        guide = MARKETING_GUIDE,
        idea = original_idea,
        name = business.name,
        audience = business.audience,
        original = original_script,
        instruction = instruction,
    )
}

/// Prompt for decomposing a script into ordered scenes with image prompts.
pub fn scenario(script: &str) -> String {
    format!(
        r#"
أنت مخرج فني ومحلل سيناريوهات. مهمتك هي تحليل السيناريو التالي وتقسيمه إلى مشاهد فردية، مع وصف مرئي لكل مشهد وإنشاء موجه (prompt) لتوليد صورة لكل مشهد.
يجب أن تكون ردودك باللغة العربية.

السيناريو:
---
{script}
---

المهمة:
قم بتحليل السيناريو أعلاه وقم بإخراج مصفوفة من الكائنات (JSON array). كل كائن في المصفوفة يجب أن يمثل مشهدًا واحدًا ويحتوي على الحقول التالية:
- "sentence": الجملة أو الجزء الرئيسي من النص الذي يصف هذا المشهد.
- "sceneDescription": وصف مرئي مفصل للمشهد، بما في ذلك الشخصيات، والملابس، والخلفية، والإضاءة، وزاوية الكاميرا.
- "imagePrompt": موجه (prompt) باللغة الإنجليزية، غني بالتفاصيل ومناسب لتوليد صورة فوتوغرافية واقعية وعالية الجودة باستخدام نموذج تحويل النص إلى صورة. يجب أن يصف الموجه المشهد بدقة. مثال للموجه: "A cinematic, full-body shot of a young woman with long dark hair, wearing a vibrant red silk evening gown, standing on a balcony overlooking a city at twilight. Soft, warm lighting, shallow depth of field, fashion photography style. --ar 9:16"
"#,
        script = script,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthlyGoal;

    fn business() -> BusinessInfo {
        BusinessInfo {
            name: "أزياء ريم".to_string(),
            audience: "نساء 20-35".to_string(),
            stage: "جديد".to_string(),
            products: "فساتين".to_string(),
        }
    }

    #[test]
    fn test_ideas_prompt_budget_variants() {
        let mut info = IdeaGenerationInfo {
            product_details: "فستان سهرة".to_string(),
            event: "عيد".to_string(),
            ..Default::default()
        };

        let no_budget = ideas(&business(), &info);
        assert!(no_budget.contains("لا توجد ميزانية متاحة"));

        info.has_budget = BudgetChoice::Yes;
        let unspecified = ideas(&business(), &info);
        assert!(unspecified.contains("لم يحدد المبلغ"));

        info.budget_amount = Some("100 دولار".to_string());
        let with_amount = ideas(&business(), &info);
        assert!(with_amount.contains("الميزانية المتاحة: 100 دولار"));
    }

    #[test]
    fn test_ideas_prompt_additional_info_is_optional() {
        let mut info = IdeaGenerationInfo::default();
        let without = ideas(&business(), &info);
        assert!(!without.contains("معلومات إضافية من المستخدم"));

        info.additional_info = Some("أفكار مرحة".to_string());
        let with = ideas(&business(), &info);
        assert!(with.contains("معلومات إضافية من المستخدم يجب التركيز عليها: \"أفكار مرحة\""));
    }

    #[test]
    fn test_strategy_prompt_goal_wording() {
        let mut info = ContentPlanInfo {
            store_name: "أزياء ريم".to_string(),
            ..Default::default()
        };
        info.monthly_goal = MonthlyGoal::Sales;
        assert!(strategy(&info).contains("زيادة المبيعات المباشرة"));
        info.monthly_goal = MonthlyGoal::Awareness;
        assert!(strategy(&info).contains("زيادة الوعي وجذب متابعين جدد"));
    }

    #[test]
    fn test_monthly_plan_prompt_embeds_guide() {
        let info = ContentPlanInfo::default();
        let prompt = monthly_plan(&info);
        assert!(prompt.contains("دليل المحتوى المتقدم للانتشار الفيروسي"));
        assert!(prompt.contains("أنشئ الخطة الكاملة لـ 4 أسابيع"));
    }

    #[test]
    fn test_script_type_instructions_are_exclusive() {
        let visual = script_type_instruction(ScriptType::Visual);
        let text = script_type_instruction(ScriptType::Text);
        let both = script_type_instruction(ScriptType::Both);
        assert!(visual.contains("لا يجب أن يحتوي السكربت على أي حوار"));
        assert!(text.contains("لا تصف أي مشاهد بصرية"));
        assert!(both.contains("متوازنًا"));
        assert_ne!(visual, text);
        assert_ne!(text, both);
    }

    #[test]
    fn test_script_prompt_substitutes_story_fields() {
        let script_info = ScriptGenerationInfo {
            product_defined: "قميص قطني أبيض".to_string(),
            cta_text: "اكتشفي الأناقة الآن".to_string(),
            ..Default::default()
        };
        let prompt = script(&script_info, &business(), ScriptType::Both);
        assert!(prompt.contains("المنتج المحدد: قميص قطني أبيض"));
        assert!(prompt.contains("\"اكتشفي الأناقة الآن\""));
        assert!(prompt.contains("اسم المتجر: أزياء ريم"));
    }

    #[test]
    fn test_scenario_prompt_embeds_script() {
        let prompt = scenario("مشهد أول. مشهد ثانٍ.");
        assert!(prompt.contains("مشهد أول. مشهد ثانٍ."));
        assert!(prompt.contains("imagePrompt"));
        assert!(prompt.contains("sceneDescription"));
    }
}
